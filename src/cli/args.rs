//! Command-line argument parsing for triagem.
//!
//! Arguments are parsed by hand: the surface is small and every value flag
//! accepts both `--flag value` and `--flag=value`.

use crate::error::ConfigError;

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Uso: triagem [OPÇÕES]

Opções:
  --url <URL>            URL base do serviço de análise [env: TRIAGEM_URL]
  --timeout <SEGUNDOS>   Tempo limite da requisição [env: TRIAGEM_TIMEOUT_SECS]
  --max-file-mb <N>      Tamanho máximo do arquivo em MB [env: TRIAGEM_MAX_FILE_MB]
  --field <CHAVE=VALOR>  Campo extra enviado no formulário (repetível)
  --log-file <CAMINHO>   Arquivo de log [env: TRIAGEM_LOG]
  -V, --version          Mostra a versão
  -h, --help             Mostra esta ajuda
";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI with the given overrides (default)
    RunTui(CliOverrides),
}

/// Settings given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_file_mb: Option<u64>,
    /// `--field` pairs in the order given
    pub fields: Vec<(String, String)>,
    pub log_file: Option<String>,
}

/// Parse command-line arguments and return the command to run.
///
/// `--version` and `--help` win over anything else on the line, but only
/// once the arguments before them parsed cleanly.
///
/// # Examples
///
/// ```
/// use triagem::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["triagem".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" => {
                let value = take_value(&flag, inline, &mut args)?;
                overrides.url = Some(parse_url(&flag, &value)?);
            }
            "--timeout" => {
                let value = take_value(&flag, inline, &mut args)?;
                overrides.timeout_secs = Some(parse_positive(&flag, &value)?);
            }
            "--max-file-mb" => {
                let value = take_value(&flag, inline, &mut args)?;
                overrides.max_file_mb = Some(parse_positive(&flag, &value)?);
            }
            "--field" => {
                let value = take_value(&flag, inline, &mut args)?;
                overrides.fields.push(parse_field(&flag, &value)?);
            }
            "--log-file" => {
                let value = take_value(&flag, inline, &mut args)?;
                overrides.log_file = Some(value);
            }
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }

    Ok(CliCommand::RunTui(overrides))
}

fn take_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    match inline {
        Some(value) => Ok(value),
        None => rest
            .next()
            .ok_or_else(|| ConfigError::MissingValue(flag.to_string())),
    }
}

/// Accept only absolute http(s) URLs.
pub(crate) fn parse_url(key: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    let has_host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());
    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::invalid(
            key,
            value,
            "expected an http:// or https:// URL",
        ))
    }
}

pub(crate) fn parse_positive(key: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::invalid(key, value, "must be greater than zero")),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::invalid(key, value, e.to_string())),
    }
}

fn parse_field(key: &str, value: &str) -> Result<(String, String), ConfigError> {
    match value.split_once('=') {
        Some((name, field_value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), field_value.to_string()))
        }
        _ => Err(ConfigError::invalid(key, value, "expected key=value")),
    }
}
