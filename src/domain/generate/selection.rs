//! Lowering of a [`Selection`] into an installer [`Script`].

use crate::domain::generator_config::GeneratorConfig;
use crate::domain::script::{Script, Statement};
use crate::domain::{CustomScriptKind, Selection, Tool, ToolType};

pub(crate) const TITLE: &str = "Automated macOS Development Environment Setup";

pub(crate) fn build(selection: &Selection, config: &GeneratorConfig) -> Script {
    let mut script = Script::new(TITLE);
    script.push(Statement::BootstrapHomebrew);

    for tool_type in ToolType::ALL {
        let tools: Vec<&Tool> = selection.tools_of_type(tool_type).collect();
        if tools.is_empty() {
            continue;
        }

        script.section(section_title(tool_type));
        if let Some(prerequisite) = prerequisite(tool_type) {
            script.push(prerequisite);
        }
        for tool in &tools {
            script.push(tool_statement(tool));
        }
        script.count(summary_label(tool_type), tools.len());
    }

    if !selection.language_versions.is_empty() {
        script.section("Language Runtimes");
        for pin in &selection.language_versions {
            script.push(Statement::InstallRuntime { language: pin.language, version: pin.version.clone() });
        }
        script.count("Language runtimes", selection.language_versions.len());
    }

    if !selection.custom_scripts.is_empty() {
        script.section("Custom Scripts");
        for custom in &selection.custom_scripts {
            script.push(match custom.kind {
                CustomScriptKind::Dotfile => Statement::AppendToFile {
                    label: custom.name.clone(),
                    path: config.shell.rc_file.clone(),
                    content: custom.content.clone(),
                },
                CustomScriptKind::Command => {
                    Statement::RunRaw { label: custom.name.clone(), command: custom.content.clone() }
                }
            });
        }
        script.count("Custom scripts", selection.custom_scripts.len());
    }

    script.next_steps = vec![
        format!("Restart your terminal or run: source {}", config.shell.rc_file),
        "Verify installations with: brew doctor".to_string(),
        "Start building amazing things!".to_string(),
    ];
    script
}

fn section_title(tool_type: ToolType) -> &'static str {
    match tool_type {
        ToolType::Brew => "Installing CLI Tools (Formulae)",
        ToolType::BrewCask => "Installing Applications (Casks)",
        ToolType::Mas => "Installing App Store Apps",
        ToolType::Npm => "Installing Global npm Packages",
        ToolType::Custom => "Running Custom Installers",
    }
}

fn summary_label(tool_type: ToolType) -> &'static str {
    match tool_type {
        ToolType::Brew => "CLI tools",
        ToolType::BrewCask => "Applications",
        ToolType::Mas => "App Store apps",
        ToolType::Npm => "npm packages",
        ToolType::Custom => "Custom installers",
    }
}

/// Command a section depends on, installed through Homebrew when missing.
fn prerequisite(tool_type: ToolType) -> Option<Statement> {
    let (command, formula) = match tool_type {
        ToolType::Mas => ("mas", "mas"),
        ToolType::Npm => ("npm", "node"),
        _ => return None,
    };
    Some(Statement::EnsureCommand { command: command.to_string(), formula: formula.to_string() })
}

fn tool_statement(tool: &Tool) -> Statement {
    let label = tool.name.clone();
    let Some(target) = tool.canonical_target().map(str::to_string) else {
        return Statement::RunRaw { label, command: tool.install_command.clone() };
    };

    match tool.tool_type {
        ToolType::Brew => Statement::InstallFormula { label, formula: target },
        ToolType::BrewCask => Statement::InstallCask { label, cask: target },
        ToolType::Mas => Statement::InstallMasApp { label, app_id: target },
        ToolType::Npm => Statement::InstallNpmGlobal { package: target },
        ToolType::Custom => Statement::RunRaw { label, command: tool.install_command.clone() },
    }
}
