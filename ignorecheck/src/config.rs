use forgeconf::forgeconf;
use gitpattern::Rule;

use crate::scan::ScanOptions;

pub fn current_dir() -> String {
    ".".to_string()
}

#[forgeconf(config(path = "ignorecheck.toml"))]
pub struct Config {
    #[field(name = "rules")]
    pub rules: Vec<String>,

    #[field(name = "scan")]
    pub scan: ScanConfig,
}

#[forgeconf]
pub struct ScanConfig {
    #[field(default = current_dir())]
    pub root: String,

    #[field(default = true)]
    pub recursive: bool,

    #[field(default = None)]
    pub max_depth: Option<usize>,
}

impl Config {
    pub fn compiled_rules(&self) -> Vec<Rule> {
        compile_lines(&self.rules)
    }
}

impl ScanConfig {
    pub fn options(&self) -> ScanOptions {
        ScanOptions {
            recursive: self.recursive,
            max_depth: self.max_depth,
        }
    }
}

/// Compiles every line, comments excluded. Blank lines are kept: they
/// compile to rules that match nothing.
pub fn compile_lines(lines: &[String]) -> Vec<Rule> {
    lines
        .iter()
        .filter(|line| !line.starts_with('#'))
        .map(|line| gitpattern::compile(line.trim_end_matches(['\r', '\n'])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_line_terminators() {
        let lines = vec![
            "# build output".to_string(),
            "target/\r".to_string(),
            "".to_string(),
            "!keep.log".to_string(),
        ];

        let rules = compile_lines(&lines);
        let patterns: Vec<&str> = rules
            .iter()
            .map(Rule::pattern)
            .collect();

        assert_eq!(patterns, vec!["target/", "", "!keep.log"]);
        assert!(rules[0].is_dir());
        assert!(rules[2].is_negate());
    }
}
