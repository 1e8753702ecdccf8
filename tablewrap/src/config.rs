/// Where each row is split when wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAt {
    /// Split roughly in half, biased to an even split index. Extra columns
    /// end up on the over side.
    Auto,
    /// Split at a fixed cell index.
    At(usize),
}

/// Reflow configuration. Built once per attach and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Viewport width at or below which tables are wrapped, in columns.
    pub breakpoint: u16,
    pub split_at: SplitAt,
    /// Prefix prepended to every generated class name, in case of clashes.
    pub class_prefix: String,
    /// Number of leading cells per row that span both visual rows when
    /// wrapped instead of being relocated.
    pub header_count: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            breakpoint: 690,
            split_at: SplitAt::Auto,
            class_prefix: "tw-".to_string(),
            header_count: 1,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breakpoint(mut self, breakpoint: u16) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn split_at(mut self, split_at: SplitAt) -> Self {
        self.split_at = split_at;
        self
    }

    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn header_count(mut self, count: usize) -> Self {
        self.header_count = count;
        self
    }
}

/// The five class names the transform stamps onto wrapped markup. Any styling
/// written against a reflowed table keys off these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classes {
    /// Put on the whole table while wrapped.
    pub table: String,
    /// Put on the top row of each pair.
    pub over: String,
    /// Put on the bottom row of each pair.
    pub under: String,
    /// Put on header cells spanning both rows.
    pub header: String,
    /// Put on cells whose colspan was adjusted.
    pub stretched: String,
}

impl Classes {
    pub fn derive(prefix: &str) -> Self {
        Self {
            table: format!("{prefix}wrapped"),
            over: format!("{prefix}over"),
            under: format!("{prefix}under"),
            header: format!("{prefix}header"),
            stretched: format!("{prefix}stretched"),
        }
    }
}
