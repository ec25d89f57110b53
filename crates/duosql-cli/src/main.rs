use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};

use duosql_ast::Statement;
use duosql_error::Severity;
use duosql_parser::{parse, parse_rule, Diagnostic, Dialect, Fragment, ParserConfig, StartRule};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const STDIN_NAME: &str = "<stdin>";
const COMMAND_NAME: &str = "<command>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Sql,
    Debug,
    Json,
}

impl OutputFormat {
    fn from_arg(value: &str) -> Result<Self, String> {
        match value {
            "sql" => Ok(Self::Sql),
            "debug" => Ok(Self::Debug),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format `{other}`; expected sql, debug or json"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    dialect: Option<Dialect>,
    config_path: Option<String>,
    rule: Option<String>,
    max_depth: Option<usize>,
    format: OutputFormat,
    command: Option<String>,
    files: Vec<String>,
    verbose: bool,
    show_help: bool,
}

/// One JSON line of `--format json` output.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonRecord<'a> {
    Statement {
        source: &'a str,
        kind: String,
        sql: String,
    },
    Fragment {
        source: &'a str,
        rule: &'a str,
        sql: String,
    },
    Diagnostic {
        source: &'a str,
        severity: Severity,
        code: &'static str,
        message: &'a str,
        line: Option<u32>,
        column: Option<u32>,
        offset: Option<u32>,
        span: [u32; 2],
        expected: &'a [String],
    },
}

fn main() {
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let exit_code = run(std::env::args_os(), &mut input, &mut stdout, &mut stderr);
    drop(input);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Exit code 0 when no error diagnostics were reported, 1 when some were
/// (or an input could not be read), 2 on usage and configuration errors.
fn run<I, R, W, E>(args: I, input: &mut R, out: &mut W, err: &mut E) -> i32
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let options = match parse_args(args) {
        Ok(options) => options,
        Err(message) => {
            let _ = writeln!(err, "error: {message}");
            let _ = write_usage(err);
            return 2;
        }
    };

    if options.show_help {
        return i32::from(write_usage(out).is_err());
    }

    init_logging(options.verbose);

    let config = match load_config(&options) {
        Ok(config) => config,
        Err(message) => {
            let _ = writeln!(err, "error: {message}");
            return 2;
        }
    };
    let start = match options.rule.as_deref().map(StartRule::from_name).transpose() {
        Ok(start) => start,
        Err(error) => {
            let _ = writeln!(err, "error: {error}");
            return 2;
        }
    };
    tracing::debug!(
        target: "duosql.cli",
        dialect = %config.dialect,
        max_depth = config.max_depth,
        rule = start.map_or("stmt_list", StartRule::rule_name),
        "configured"
    );

    let mut failed = false;
    let mut sources = Vec::new();
    if let Some(command) = options.command {
        sources.push((COMMAND_NAME.to_owned(), command));
    }
    for path in &options.files {
        match fs::read_to_string(path) {
            Ok(text) => sources.push((path.clone(), text)),
            Err(error) => {
                let _ = writeln!(err, "error: cannot read `{path}`: {error}");
                failed = true;
            }
        }
    }
    if sources.is_empty() && !failed {
        let mut text = String::new();
        if let Err(error) = input.read_to_string(&mut text) {
            let _ = writeln!(err, "error: cannot read standard input: {error}");
            return 1;
        }
        sources.push((STDIN_NAME.to_owned(), text));
    }

    for (name, sql) in &sources {
        match process_source(name, sql, &config, start, options.format, out, err) {
            Ok(has_errors) => failed |= has_errors,
            Err(error) => {
                let _ = writeln!(err, "error: failed writing output: {error}");
                return 1;
            }
        }
    }
    i32::from(failed)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when `run` is called repeatedly.
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Defaults, then the JSON config file, then individual flags.
fn load_config(options: &CliOptions) -> Result<ParserConfig, String> {
    let mut config = match options.config_path.as_deref() {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|error| format!("cannot read config `{path}`: {error}"))?;
            serde_json::from_str::<ParserConfig>(&text)
                .map_err(|error| format!("invalid config `{path}`: {error}"))?
        }
        None => ParserConfig::default(),
    };
    if let Some(dialect) = options.dialect {
        config = config.with_dialect(dialect);
    }
    if let Some(depth) = options.max_depth {
        config = config.with_max_depth(depth);
    }
    config.validate().map_err(|error| error.to_string())?;
    Ok(config)
}

/// Parse one source and report it. Returns whether any error diagnostic
/// was produced.
fn process_source<W, E>(
    name: &str,
    sql: &str,
    config: &ParserConfig,
    start: Option<StartRule>,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool>
where
    W: Write,
    E: Write,
{
    let diagnostics = match start {
        None | Some(StartRule::StmtList) => {
            let output = parse(sql, config);
            for stmt in &output.statements {
                write_statement(name, stmt, format, out)?;
            }
            tracing::debug!(
                target: "duosql.cli",
                source = name,
                statements = output.statements.len(),
                diagnostics = output.diagnostics.len(),
                "parsed source"
            );
            output.diagnostics
        }
        Some(rule) => {
            let (fragment, diagnostics) = parse_rule(sql, rule, config);
            if let Some(fragment) = &fragment {
                write_fragment(name, rule, fragment, format, out)?;
            }
            diagnostics
        }
    };
    for diag in &diagnostics {
        write_diagnostic(name, diag, format, out, err)?;
    }
    Ok(diagnostics.iter().any(|d| d.severity == Severity::Error))
}

fn write_statement<W: Write>(
    name: &str,
    stmt: &Statement,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Sql => writeln!(out, "{stmt};"),
        OutputFormat::Debug => writeln!(out, "{stmt:#?}"),
        OutputFormat::Json => write_json(
            out,
            &JsonRecord::Statement {
                source: name,
                kind: format!("{:?}", stmt.kind()),
                sql: stmt.to_string(),
            },
        ),
    }
}

fn write_fragment<W: Write>(
    name: &str,
    rule: StartRule,
    fragment: &Fragment,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Sql => writeln!(out, "{}", render_fragment(fragment)),
        OutputFormat::Debug => writeln!(out, "{fragment:#?}"),
        OutputFormat::Json => write_json(
            out,
            &JsonRecord::Fragment {
                source: name,
                rule: rule.rule_name(),
                sql: render_fragment(fragment),
            },
        ),
    }
}

fn render_fragment(fragment: &Fragment) -> String {
    fn join<T: ToString>(items: &[T], sep: &str) -> String {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(sep)
    }
    match fragment {
        Fragment::Statements(stmts) => join(stmts, ";\n"),
        Fragment::Statement(stmt) => stmt.to_string(),
        Fragment::Expr(expr) => expr.to_string(),
        Fragment::DataType(data_type) => data_type.to_string(),
        Fragment::OrderBy(terms) => format!("ORDER BY {}", join(terms, ", ")),
        Fragment::PartitionOption(partition) => partition.to_string(),
        Fragment::Hints(hints) => format!("/*+ {} */", join(hints, " ")),
    }
}

fn write_diagnostic<W, E>(
    name: &str,
    diag: &Diagnostic,
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    W: Write,
    E: Write,
{
    match format {
        OutputFormat::Json => write_json(
            out,
            &JsonRecord::Diagnostic {
                source: name,
                severity: diag.severity,
                code: diag.code.as_str(),
                message: &diag.message,
                line: diag.position.map(|p| p.line),
                column: diag.position.map(|p| p.column),
                offset: diag.position.map(|p| p.offset),
                span: [diag.span.start, diag.span.end],
                expected: &diag.expected,
            },
        ),
        OutputFormat::Sql | OutputFormat::Debug => writeln!(err, "{name}:{diag}"),
    }
}

fn write_json<W: Write>(out: &mut W, record: &JsonRecord<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)
}

fn parse_args<I>(args: I) -> Result<CliOptions, String>
where
    I: IntoIterator<Item = OsString>,
{
    let mut iter = args.into_iter();
    let _argv0 = iter.next();

    let mut options = CliOptions {
        dialect: None,
        config_path: None,
        rule: None,
        max_depth: None,
        format: OutputFormat::Sql,
        command: None,
        files: Vec::new(),
        verbose: false,
        show_help: false,
    };

    while let Some(argument) = iter.next() {
        let arg = argument.to_string_lossy().into_owned();

        // `--flag=value` and `--flag value` are equivalent.
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") || flag == "-c" => {
                (flag.to_owned(), Some(value.to_owned()))
            }
            _ => (arg.clone(), None),
        };
        let mut value = |what: &str| -> Result<String, String> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => iter
                    .next()
                    .map(|v| v.to_string_lossy().into_owned())
                    .ok_or_else(|| format!("missing {what} for `{flag}`")),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => options.show_help = true,
            "-v" | "--verbose" => options.verbose = true,
            "--dialect" => {
                let name = value("dialect name")?;
                options.dialect = Some(name.parse().map_err(|_| {
                    format!("unknown dialect `{name}`; expected mysql or oracle")
                })?);
            }
            "--config" => options.config_path = Some(value("file path")?),
            "--rule" => options.rule = Some(value("rule name")?),
            "--max-depth" => {
                let raw = value("integer")?;
                let depth = raw
                    .parse::<usize>()
                    .map_err(|_| format!("invalid integer for `--max-depth`: `{raw}`"))?;
                options.max_depth = Some(depth);
            }
            "--format" => options.format = OutputFormat::from_arg(&value("format name")?)?,
            "-c" | "--command" => {
                if options.command.is_some() {
                    return Err(String::from("`-c/--command` may only be provided once"));
                }
                options.command = Some(value("SQL argument")?);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option `{other}`"));
            }
            _ => options.files.push(arg),
        }
    }

    if options.command.is_some() && !options.files.is_empty() {
        return Err(String::from("`-c/--command` cannot be combined with input files"));
    }
    Ok(options)
}

fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Usage: duosql [--dialect mysql|oracle] [--config FILE] [--rule NAME]\n\
         \x20             [--max-depth N] [--format sql|debug|json] [-v] [-c SQL | FILE...]\n\
         \n\
         Reads SQL from -c, the given files, or standard input and prints each\n\
         statement in canonical form. Diagnostics go to standard error, or to\n\
         standard output as JSON lines with --format json.\n\
         \n\
         Exit status: 0 no errors, 1 syntax or input errors, 2 usage errors.\n\
         \n\
         Examples:\n\
         \n\
         duosql -c \"SELECT a FROM t WHERE b = 1\"\n\
         duosql --dialect oracle schema.sql\n\
         duosql --rule expr -c \"a OR b AND c\" --format debug\n",
    )
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::io::{Cursor, Write};

    use super::{parse_args, render_fragment, run, CliOptions, OutputFormat};
    use duosql_parser::{parse_rule, Dialect, ParserConfig, StartRule};

    fn parse_from(args: &[&str]) -> Result<CliOptions, String> {
        let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
        parse_args(os_args)
    }

    fn run_with(args: &[&str], stdin: &str) -> (i32, String, String) {
        let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(os_args, &mut input, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).expect("stdout is utf-8"),
            String::from_utf8(err).expect("stderr is utf-8"),
        )
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_from(&["duosql"]).expect("default args should parse");
        assert_eq!(options.dialect, None);
        assert_eq!(options.format, OutputFormat::Sql);
        assert!(options.files.is_empty());
        assert!(options.command.is_none());
        assert!(!options.verbose);
    }

    #[test]
    fn test_parse_flags_and_equals_forms() {
        let options = parse_from(&[
            "duosql",
            "--dialect=oracle",
            "--max-depth",
            "32",
            "--format=json",
            "--rule",
            "expr",
            "-v",
            "a.sql",
            "b.sql",
        ])
        .expect("args should parse");
        assert_eq!(options.dialect, Some(Dialect::Oracle));
        assert_eq!(options.max_depth, Some(32));
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.rule.as_deref(), Some("expr"));
        assert!(options.verbose);
        assert_eq!(options.files, ["a.sql", "b.sql"]);
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        let error = parse_from(&["duosql", "--wat"]).expect_err("unknown option");
        assert!(error.contains("unknown option"));
        let error = parse_from(&["duosql", "--dialect", "sqlite"]).expect_err("bad dialect");
        assert!(error.contains("unknown dialect"));
        let error = parse_from(&["duosql", "--max-depth", "x"]).expect_err("bad depth");
        assert!(error.contains("invalid integer"));
        let error = parse_from(&["duosql", "--format"]).expect_err("missing value");
        assert!(error.contains("missing format name"));
        let error = parse_from(&["duosql", "-c", "SELECT 1", "x.sql"]).expect_err("conflict");
        assert!(error.contains("cannot be combined"));
    }

    #[test]
    fn test_run_command_prints_canonical_sql() {
        let (code, out, err) = run_with(&["duosql", "-c", "select a from t where b=1; select 2"], "");
        assert_eq!(code, 0, "{err}");
        assert_eq!(out, "SELECT a FROM t WHERE b = 1;\nSELECT 2;\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_reads_stdin_and_reports_errors() {
        let (code, out, err) = run_with(&["duosql"], "SELECT 1; SELECT 1 +; SELECT 3");
        assert_eq!(code, 1);
        assert_eq!(out, "SELECT 1;\nSELECT 3;\n");
        assert!(err.starts_with("<stdin>:1:21: error [syntax]"), "{err}");
        assert!(err.contains("expected expression after binary operator"));
    }

    #[test]
    fn test_run_dialect_flag() {
        let (code, out, _) = run_with(&["duosql", "--dialect", "oracle", "-c", "SELECT a || b FROM dual"], "");
        assert_eq!(code, 0);
        assert_eq!(out, "SELECT a || b FROM dual;\n");
        let (code, _, _) = run_with(&["duosql", "--dialect", "mysql", "-c", "SELECT a FROM t MINUS SELECT b FROM u"], "");
        assert_eq!(code, 1);
    }

    #[test]
    fn test_run_json_format() {
        let (code, out, err) = run_with(&["duosql", "--format", "json", "-c", "SELECT 1; SELECT 1 +"], "");
        assert_eq!(code, 1);
        assert!(err.is_empty(), "{err}");
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).expect("each line is JSON"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "statement");
        assert_eq!(lines[0]["kind"], "Select");
        assert_eq!(lines[0]["sql"], "SELECT 1");
        assert_eq!(lines[1]["type"], "diagnostic");
        assert_eq!(lines[1]["severity"], "error");
        assert_eq!(lines[1]["code"], "syntax");
        assert_eq!(lines[1]["offset"], 20);
        assert_eq!(lines[1]["message"], "expected expression after binary operator");
    }

    #[test]
    fn test_run_rule_flag() {
        let (code, out, _) = run_with(&["duosql", "--rule", "expr", "-c", "a OR b AND c"], "");
        assert_eq!(code, 0);
        assert_eq!(out, "a OR (b AND c)\n");

        let (code, _, err) = run_with(&["duosql", "--rule", "nonsense", "-c", "1"], "");
        assert_eq!(code, 2);
        assert!(err.contains("nonsense"));
    }

    #[test]
    fn test_run_config_file_and_overrides() {
        let mut file = tempfile::NamedTempFile::new().expect("temp config");
        write!(file, r#"{{"dialect": "oracle", "max_depth": 12}}"#).expect("write config");
        let path = file.path().to_string_lossy().into_owned();

        let (code, out, _) = run_with(&["duosql", "--config", &path, "-c", "SELECT level FROM dual"], "");
        assert_eq!(code, 0);
        assert_eq!(out, "SELECT LEVEL FROM dual;\n");

        let deep = format!("SELECT {}1{}", "(".repeat(30), ")".repeat(30));
        let (code, _, err) = run_with(&["duosql", "--config", &path, "-c", &deep], "");
        assert_eq!(code, 1);
        assert!(err.contains("recursion"), "{err}");

        let (code, _, _) = run_with(
            &["duosql", "--config", &path, "--max-depth", "64", "-c", &deep],
            "",
        );
        assert_eq!(code, 0);

        let (code, _, err) = run_with(&["duosql", "--max-depth", "0", "-c", "SELECT 1"], "");
        assert_eq!(code, 2);
        assert!(err.contains("max_depth"), "{err}");
    }

    #[test]
    fn test_run_invalid_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp config");
        write!(file, "{{not json").expect("write config");
        let path = file.path().to_string_lossy().into_owned();
        let (code, _, err) = run_with(&["duosql", "--config", &path, "-c", "SELECT 1"], "");
        assert_eq!(code, 2);
        assert!(err.contains("invalid config"), "{err}");
    }

    #[test]
    fn test_run_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let good = dir.path().join("good.sql");
        let bad = dir.path().join("bad.sql");
        std::fs::write(&good, "CREATE TABLE t (a INT, b VARCHAR(10));").expect("write");
        std::fs::write(&bad, "SELECT FROM").expect("write");
        let good = good.to_string_lossy().into_owned();
        let bad = bad.to_string_lossy().into_owned();

        let (code, out, err) = run_with(&["duosql", &good], "");
        assert_eq!(code, 0, "{err}");
        assert_eq!(out, "CREATE TABLE t (a INT, b VARCHAR(10));\n");

        let (code, out, err) = run_with(&["duosql", &good, &bad], "");
        assert_eq!(code, 1);
        assert_eq!(out.lines().count(), 1);
        assert!(err.starts_with(&format!("{bad}:")), "{err}");

        let missing = dir.path().join("missing.sql").to_string_lossy().into_owned();
        let (code, _, err) = run_with(&["duosql", &missing], "");
        assert_eq!(code, 1);
        assert!(err.contains("cannot read"));
    }

    #[test]
    fn test_help_and_usage_errors() {
        let (code, out, _) = run_with(&["duosql", "--help"], "");
        assert_eq!(code, 0);
        assert!(out.starts_with("Usage: duosql"));
        let (code, _, err) = run_with(&["duosql", "--bogus"], "");
        assert_eq!(code, 2);
        assert!(err.contains("Usage: duosql"));
    }

    #[test]
    fn test_render_fragments() {
        let config = ParserConfig::new(Dialect::Oracle);
        let (fragment, _) = parse_rule("ORDER BY a DESC, b", StartRule::OrderBy, &config);
        assert_eq!(render_fragment(&fragment.expect("order by")), "ORDER BY a DESC, b");
        let (fragment, _) = parse_rule("FULL(t)", StartRule::Hint, &config);
        assert_eq!(render_fragment(&fragment.expect("hints")), "/*+ FULL(t) */");
    }
}
