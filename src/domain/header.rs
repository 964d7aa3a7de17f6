#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub names: Vec<String>,
}

impl Header {
    pub fn from_line(line: &str) -> Header {
        let mut names: Vec<String> = line.split(',').map(str::to_string).collect();

        // Trailing empty names are dropped, but an empty line keeps its one empty name
        if !line.is_empty() {
            while names.last().map_or(false, |name| name.is_empty()) {
                names.pop();
            }
        }

        Header { names }
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
}
