//! Install command implementation
//!
//! Every input (tool, project, env values) is collected before anything is
//! written. Leaving a prompt with ESC or Ctrl-C cancels the install with
//! nothing on disk changed.

use std::path::{Path, PathBuf};

use console::Style;
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};

use crate::cli::InstallArgs;
use crate::commands::helpers::load_registry;
use crate::config::Settings;
use crate::env::EnvInput;
use crate::error::{Result, install};
use crate::host::{HostId, HostTarget};
use crate::installer::{GeneratedConfig, Installer};
use crate::progress::Spinner;
use crate::registry::{EnvFieldSpec, PackageDescriptor, PackageKind, Registry};

/// Interactive questions asked during an install.
///
/// `Ok(None)` means the operator cancelled.
pub trait Prompter {
    fn select_host(&self, hosts: Vec<HostId>) -> Result<Option<HostId>>;
    fn project_path(&self, default: &Path) -> Result<Option<PathBuf>>;
    fn env_value(&self, field: &EnvFieldSpec) -> Result<Option<String>>;
}

/// Terminal prompts backed by `inquire`
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn select_host(&self, hosts: Vec<HostId>) -> Result<Option<HostId>> {
        let labels: Vec<&str> = hosts.iter().map(|h| h.display_name()).collect();
        let choice = skippable(
            Select::new("Install for which tool?", labels)
                .with_starting_cursor(0)
                .without_filtering()
                .with_help_message("↑↓ to move, ENTER to select, ESC to cancel")
                .prompt_skippable(),
        )?;
        Ok(choice.and_then(|label| hosts.into_iter().find(|h| h.display_name() == label)))
    }

    fn project_path(&self, default: &Path) -> Result<Option<PathBuf>> {
        let default = default.display().to_string();
        let answer = skippable(
            Text::new("Project directory:")
                .with_default(&default)
                .with_help_message("The skill is linked into <dir>/.claude/commands")
                .prompt_skippable(),
        )?;
        Ok(answer.map(PathBuf::from))
    }

    fn env_value(&self, field: &EnvFieldSpec) -> Result<Option<String>> {
        let message = format!("{}:", field.key);
        if field.sensitive {
            return skippable(
                Password::new(&message)
                    .without_confirmation()
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .prompt_skippable(),
            );
        }

        let mut prompt = Text::new(&message);
        if let Some(default) = &field.default {
            prompt = prompt.with_default(default);
        }
        if let Some(placeholder) = &field.placeholder {
            prompt = prompt.with_placeholder(placeholder);
        }
        skippable(prompt.prompt_skippable())
    }
}

/// Treat Ctrl-C like ESC
fn skippable<T>(answer: std::result::Result<Option<T>, InquireError>) -> Result<Option<T>> {
    match answer {
        Err(InquireError::OperationInterrupted) => Ok(None),
        other => Ok(other?),
    }
}

/// What an install did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Cancelled,
    Skill { link: PathBuf },
    Bridge(GeneratedConfig),
}

/// Run install command
pub fn run(root: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let (settings, registry) = load_registry(root)?;
    let cwd = std::env::current_dir()?;

    let outcome = execute(&registry, &settings, &args, &cwd, &InquirePrompter)?;
    report(&registry, &args.id, &outcome);
    Ok(())
}

/// Gather inputs, then install
pub fn execute(
    registry: &Registry,
    settings: &Settings,
    args: &InstallArgs,
    cwd: &Path,
    prompter: &dyn Prompter,
) -> Result<Outcome> {
    let package = registry.get(&args.id)?;
    let installer = Installer::new(registry, settings);

    match package.kind {
        PackageKind::Skill => {
            if let Some(tool) = &args.tool {
                let host: HostId = tool.parse()?;
                if host != HostId::ClaudeCode {
                    return Err(install::unsupported_target(tool.clone()));
                }
            }
            let project = match (&args.project, args.no_input) {
                (Some(project), _) => cwd.join(project),
                (None, true) => cwd.to_path_buf(),
                (None, false) => match prompter.project_path(cwd)? {
                    Some(project) => cwd.join(project),
                    None => return Ok(Outcome::Cancelled),
                },
            };
            let link = installer.install_skill(&package.id, &project)?;
            Ok(Outcome::Skill { link })
        }
        PackageKind::Mcp => {
            let Some(host) = choose_host(args, prompter)? else {
                return Ok(Outcome::Cancelled);
            };
            let Some(input) = collect_env(package, args, prompter)? else {
                return Ok(Outcome::Cancelled);
            };

            let spinner = Spinner::start(&format!("Installing {}...", package.display_name));
            match installer.install_bridge(&package.id, host, &input) {
                Ok(config) => {
                    spinner.finish();
                    Ok(Outcome::Bridge(config))
                }
                Err(e) => {
                    spinner.abandon();
                    Err(e)
                }
            }
        }
    }
}

fn choose_host(args: &InstallArgs, prompter: &dyn Prompter) -> Result<Option<HostId>> {
    if let Some(tool) = &args.tool {
        return HostTarget::parse(tool).map(|target| Some(target.id));
    }
    if args.no_input {
        return Err(install::invalid_input(
            "--tool is required with --no-input",
        ));
    }
    let hosts = HostTarget::installable().into_iter().map(|t| t.id).collect();
    prompter.select_host(hosts)
}

/// `--env` values plus one answer per editable field not given on the
/// command line
fn collect_env(
    package: &PackageDescriptor,
    args: &InstallArgs,
    prompter: &dyn Prompter,
) -> Result<Option<EnvInput>> {
    let mut input = EnvInput::parse_pairs(&args.env)?;
    if args.no_input {
        return Ok(Some(input));
    }
    for field in &package.env_fields {
        if !field.editable || input.contains(&field.key) {
            continue;
        }
        match prompter.env_value(field)? {
            Some(value) => input.insert(field.key.clone(), value),
            None => return Ok(None),
        }
    }
    Ok(Some(input))
}

fn report(registry: &Registry, id: &str, outcome: &Outcome) {
    let success = Style::new().green().bold();
    match outcome {
        Outcome::Cancelled => println!("Installation cancelled."),
        Outcome::Skill { link } => {
            println!(
                "{} Linked skill {} to {}",
                success.apply_to("✓"),
                id,
                link.display()
            );
        }
        Outcome::Bridge(config) => {
            if let Some(package) = registry.find_by_id(id) {
                if !package.compatibility.supports(config.host) {
                    eprintln!(
                        "{} {} is not marked compatible with {}",
                        Style::new().yellow().bold().apply_to("Warning:"),
                        package.display_name,
                        config.host.display_name()
                    );
                }
            }
            println!(
                "{} Saved environment to {}",
                success.apply_to("✓"),
                config.secrets.display()
            );
            match &config.written {
                Some(path) => println!(
                    "{} Added {} to {}",
                    success.apply_to("✓"),
                    id,
                    path.display()
                ),
                None => {
                    println!();
                    println!("{}", paste_hint(config.host));
                    println!();
                    println!("{}", config.text);
                }
            }
        }
    }
}

fn paste_hint(host: HostId) -> String {
    match host {
        HostId::ClaudeCode => "Add this to your project's .mcp.json:".to_string(),
        HostId::Codex => "Add this to ~/.codex/config.toml:".to_string(),
        other => format!("Add this to your {} configuration:", other.display_name()),
    }
}
