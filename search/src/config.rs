/// Skip accounting for the sequential matcher.
#[derive(Debug, Clone, Default)]
pub struct MatchConfig {
    /// Gap budget; `None` is unbounded.
    pub max_skips: Option<u32>,
    /// Characters that never charge the budget when a match lands right
    /// after them.
    pub immune_delimiters: Vec<char>,
}
