use std::path::Path;

use cli::Command;
use config::Config;
use gitpattern::Rule;
use report::Verdict;

mod cli;
mod config;
mod report;
mod scan;

#[macro_use]
extern crate log;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
usage: ignorecheck <path>...   check paths against the rules in ignorecheck.toml
       ignorecheck --scan      walk the configured root and list ignored entries";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info) // default level
        .parse_env("IGNORECHECK_LOG") // can override with IGNORECHECK_LOG=debug
        .format_timestamp_secs()
        .init();

    match Command::from_args() {
        Command::Help => println!("ignorecheck v{VERSION}\n{USAGE}"),
        Command::Check(paths) => check(&paths)?,
        Command::Scan => run_scan()?,
    }

    Ok(())
}

fn load_rules() -> Result<(Config, Vec<Rule>), Box<dyn std::error::Error>> {
    let config = Config::loader()
        .with_config()
        .load()?;

    let rules = config.compiled_rules();
    info!("Loaded {} rules from ignorecheck.toml", rules.len());

    Ok((config, rules))
}

fn check(paths: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let (_, rules) = load_rules()?;

    for raw in paths {
        // A trailing separator or an existing directory marks a directory.
        let is_dir = raw.ends_with('/') || Path::new(raw).is_dir();
        let path = raw.replace('\\', "/");
        let path = path.trim_end_matches('/');

        let verdict = Verdict::evaluate(&rules, path, is_dir);
        for rule in &verdict.matched {
            debug!("'{}' matched by '{}'", path, rule);
        }
        println!("{}", verdict.render(path));
    }

    Ok(())
}

fn run_scan() -> Result<(), Box<dyn std::error::Error>> {
    let (config, rules) = load_rules()?;
    let root = Path::new(&config.scan.root);

    if !root.is_dir() {
        error!("Scan root '{}' is not a directory", root.display());
        return Err(format!("invalid scan root '{}'", config.scan.root).into());
    }

    info!("[ignorecheck] Scanning {} (v{})", root.display(), VERSION);

    let mut ignored = 0usize;
    scan::scan(root, &config.scan.options(), &mut |entry| {
        let verdict = Verdict::evaluate(&rules, &entry.path, entry.is_dir);
        if verdict.is_ignored() {
            ignored += 1;
            println!("{}", verdict.render(&entry.path));
            // Nothing below an ignored directory can be re-included.
            return false;
        }
        true
    });

    info!("{} entries ignored", ignored);
    Ok(())
}
