//! Doctor command - verify API keys and configuration.

use crate::cli::Output;
use crate::config::Settings;
use crate::youtube::ChannelReference;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

fn print_group(title: &str, group: Vec<CheckResult>, all: &mut Vec<CheckResult>) {
    println!("{}", style(title).bold());
    for check in &group {
        check.print();
    }
    println!();
    all.extend(group);
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Creator Agency Doctor");
    println!();
    println!("Checking API keys and configuration...\n");

    let openai_key = std::env::var("OPENAI_API_KEY").ok();
    let mut checks = Vec::new();

    print_group(
        "API Keys",
        vec![
            check_key(
                "OPENAI_API_KEY",
                openai_key.as_deref(),
                true,
                "Set with: export OPENAI_API_KEY='sk-...'",
            ),
            check_key(
                "YOUTUBE_API_KEY",
                settings.youtube.api_key.as_deref(),
                false,
                "Needed for channel, video, comments and competitor reports",
            ),
            check_key(
                "TAVILY_API_KEY",
                settings.search.api_key.as_deref(),
                false,
                "Needed for search and trends",
            ),
        ],
        &mut checks,
    );

    print_group(
        "Channel",
        vec![check_default_channel(settings.youtube.default_channel.as_deref())],
        &mut checks,
    );

    print_group(
        "Directories",
        vec![check_scripts_dir(settings)],
        &mut checks,
    );

    print_group("Configuration", vec![check_config_file()], &mut checks);

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!("{} error(s) found. Please fix them first.", errors));
        anyhow::bail!("doctor found {} error(s)", errors);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Creator Agency is ready to use.");
    }

    Ok(())
}

/// Mask all but the ends of a secret.
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// A missing required key is an error, a missing optional key a warning.
fn check_key(name: &str, value: Option<&str>, required: bool, hint: &str) -> CheckResult {
    match value.map(str::trim) {
        Some(key) if !key.is_empty() => {
            CheckResult::ok(name, &format!("configured ({})", mask(key)))
        }
        _ if required => CheckResult::error(name, "not set", hint),
        _ => CheckResult::warning(name, "not set", hint),
    }
}

fn check_default_channel(channel: Option<&str>) -> CheckResult {
    const NAME: &str = "Default channel";
    match channel.map(str::trim).filter(|c| !c.is_empty()) {
        None => CheckResult::warning(
            NAME,
            "not set",
            "Set DEFAULT_CHANNEL_ID to run channel reports without an argument",
        ),
        Some(c) => match ChannelReference::parse(c) {
            ChannelReference::Id(id) => CheckResult::ok(NAME, &format!("{} (channel ID)", id)),
            ChannelReference::Query(q) => CheckResult::warning(
                NAME,
                &format!("{} (resolved by search on every use)", q),
                "Use the UC... channel ID to skip the search lookup",
            ),
        },
    }
}

fn check_scripts_dir(settings: &Settings) -> CheckResult {
    let dir = settings.scripts_dir();
    if dir.is_dir() {
        let count = std::fs::read_dir(&dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
                    .count()
            })
            .unwrap_or(0);
        CheckResult::ok(
            "Scripts directory",
            &format!("{} ({} scripts)", dir.display(), count),
        )
    } else if dir.exists() {
        CheckResult::error(
            "Scripts directory",
            &format!("{} is not a directory", dir.display()),
            "Point general.scripts_dir at a directory",
        )
    } else {
        CheckResult::warning(
            "Scripts directory",
            &format!("{} (will be created)", dir.display()),
            "Directory will be created when the first script is written",
        )
    }
}

/// Check if config file exists.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: creator-agency config edit",
        )
    }
}
