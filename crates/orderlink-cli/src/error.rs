use anyhow::Error;
use orderlink_config::ConfigError;
use orderlink_core::CoreError;
use orderlink_sheet::SheetError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            });
        }
        if let Some(sheet_err) = cause.downcast_ref::<SheetError>() {
            return ExitCode::from(sheet_exit_code(sheet_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(core_exit_code(core_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn core_exit_code(err: &CoreError) -> u8 {
    match err {
        CoreError::UnknownPhone(_) => EXIT_NOT_FOUND,
        CoreError::InvalidPhone(_)
        | CoreError::InvalidTemplate { .. }
        | CoreError::InvalidItemRange { .. } => EXIT_INVALID_INPUT,
    }
}

fn sheet_exit_code(err: &SheetError) -> u8 {
    match err {
        SheetError::Io(_) | SheetError::Json(_) => EXIT_FAILURE,
        SheetError::Parse(_) | SheetError::Unsupported(_) => EXIT_INVALID_INPUT,
        SheetError::Core(core_err) => core_exit_code(core_err),
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidLayout(_)
        | ConfigError::InvalidTemplate(_)
        | ConfigError::EmptyLinkLabel
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
