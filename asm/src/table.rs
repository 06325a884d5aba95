use indexmap::IndexMap;

/// Qualified label -> (defining line, address). Keeps definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable(IndexMap<String, (usize, u32)>);

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable(IndexMap::new())
    }

    /// Returns the previous definition if the label was already present. The
    /// new address replaces it.
    pub fn insert(&mut self, name: String, line: usize, addr: u32) -> Option<(usize, u32)> {
        self.0.insert(name, (line, addr))
    }

    pub fn get(&self, name: &str) -> Option<&(usize, u32)> {
        self.0.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u32> {
        self.0.get(name).map(|(_, addr)| *addr)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, (_, addr))| (name.as_str(), *addr))
    }
}

/// Opcode token -> location counter after its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationTable(IndexMap<String, u32>);

impl LocationTable {
    pub fn new() -> Self {
        LocationTable(IndexMap::new())
    }

    pub fn record(&mut self, opcode: &str, lc: u32) {
        self.0.insert(opcode.to_string(), lc);
    }

    pub fn get(&self, opcode: &str) -> Option<u32> {
        self.0.get(opcode).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(op, lc)| (op.as_str(), *lc))
    }
}
