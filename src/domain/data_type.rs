use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    Integer,
    String,
}

impl DataType {
    pub fn classify(field: &str) -> DataType {
        if field.is_empty() {
            return DataType::String;
        }
        match field.parse::<i32>() {
            Ok(_) => DataType::Integer,
            Err(_) => DataType::String,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => write!(f, "Integer"),
            DataType::String => write!(f, "String"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTypes {
    pub types: Vec<DataType>,
}

impl ColumnTypes {
    pub fn from_sample_line(line: &str) -> ColumnTypes {
        ColumnTypes {
            types: line.split(',').map(DataType::classify).collect(),
        }
    }
    pub fn len(&self) -> usize {
        self.types.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnTypes, DataType};
    use anyhow::Result;

    #[test]
    fn classifies_integers() -> Result<()> {
        for field in ["42", "-7", "0", "+5", "2147483647", "-2147483648"] {
            assert_eq!(DataType::Integer, DataType::classify(field), "{}", field);
        }
        Ok(())
    }

    #[test]
    fn classifies_everything_else_as_string() -> Result<()> {
        for field in [
            "",
            "3.14",
            "abc",
            "99999999999999",
            "2147483648",
            "1,000",
            " 42",
            "42 ",
            "-",
            "+",
            "0x1A",
        ] {
            assert_eq!(DataType::String, DataType::classify(field), "{:?}", field);
        }
        Ok(())
    }

    #[test]
    fn displays_labels() -> Result<()> {
        assert_eq!("Integer", DataType::Integer.to_string());
        assert_eq!("String", DataType::String.to_string());
        Ok(())
    }

    #[test]
    fn keeps_trailing_empty_fields() -> Result<()> {
        let column_types = ColumnTypes::from_sample_line("1,2,");

        assert_eq!(
            vec![DataType::Integer, DataType::Integer, DataType::String],
            column_types.types
        );
        Ok(())
    }

    #[test]
    fn samples_mixed_line() -> Result<()> {
        let column_types = ColumnTypes::from_sample_line("1,Alice,88.5");

        assert_eq!(
            vec![DataType::Integer, DataType::String, DataType::String],
            column_types.types
        );
        Ok(())
    }

    #[test]
    fn samples_empty_line_as_single_string() -> Result<()> {
        let column_types = ColumnTypes::from_sample_line("");

        assert_eq!(vec![DataType::String], column_types.types);
        Ok(())
    }
}
