use gitpattern::Rule;

/// Outcome of running one path through the rules of an ignore file.
#[derive(Debug)]
pub struct Verdict<'r> {
    /// Every rule that matched, in file order.
    pub matched: Vec<&'r Rule>,
}

impl<'r> Verdict<'r> {
    /// Evaluates `path` against `rules`. Directory-only rules are skipped for
    /// files.
    pub fn evaluate(rules: &'r [Rule], path: &str, is_dir: bool) -> Self {
        let matched = rules
            .iter()
            .filter(|rule| is_dir || !rule.is_dir())
            .filter(|rule| rule.matches(path))
            .collect();

        Self { matched }
    }

    /// The last matching rule wins.
    pub fn deciding_rule(&self) -> Option<&'r Rule> {
        self.matched
            .last()
            .copied()
    }

    pub fn is_ignored(&self) -> bool {
        self.deciding_rule()
            .is_some_and(|rule| !rule.is_negate())
    }

    pub fn render(&self, path: &str) -> String {
        match self.deciding_rule() {
            Some(rule) if !rule.is_negate() => format!("ignored  {path}  ({rule})"),
            Some(rule) => format!("included {path}  ({rule})"),
            None => format!("included {path}"),
        }
    }
}
