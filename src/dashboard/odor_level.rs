/// Last reported odor reading, shown verbatim. No history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OdorLevel(Option<String>);

impl OdorLevel {
    pub fn replace(&mut self, level: impl Into<String>) {
        self.0 = Some(level.into());
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// `--` until the first reading arrives.
    pub fn display(&self) -> &str {
        self.get().unwrap_or("--")
    }
}
