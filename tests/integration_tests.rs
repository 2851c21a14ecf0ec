//! Integration tests for gomod-outdated
//!
//! These tests verify:
//! - The decode → filter → render pipeline across all output styles
//! - JSON output round-trips through the decoder
//! - Exit requests for outdated modules

use gomod_outdated::decoder::decode_modules;
use gomod_outdated::domain::Module;
use gomod_outdated::error::AppError;
use gomod_outdated::filter::ModuleFilter;
use gomod_outdated::output::{render, OutputConfig, OutputStyle};
use gomod_outdated::runner::{DeferredExit, RunOptions, Runner};

/// Output of `go list -u -m -json all` for a small project
const GO_LIST_OUTPUT: &str = r#"{
	"Path": "example.com/app",
	"Main": true,
	"Dir": "/src/app",
	"GoMod": "/src/app/go.mod",
	"GoVersion": "1.21"
}
{
	"Path": "github.com/google/uuid",
	"Version": "v1.3.0",
	"Time": "2021-07-12T22:33:52Z",
	"Update": {
		"Path": "github.com/google/uuid",
		"Version": "v1.6.0",
		"Time": "2024-01-23T18:54:04Z"
	},
	"Dir": "/go/pkg/mod/github.com/google/uuid@v1.3.0",
	"GoMod": "/go/pkg/mod/cache/download/github.com/google/uuid/@v/v1.3.0.mod",
	"GoVersion": "1.13"
}
{
	"Path": "golang.org/x/text",
	"Version": "v0.3.7",
	"Time": "2021-08-05T13:41:00Z",
	"Update": {
		"Path": "golang.org/x/text",
		"Version": "v0.14.0",
		"Time": "2023-10-11T21:55:48Z"
	},
	"Indirect": true
}
{
	"Path": "github.com/spf13/cobra",
	"Version": "v1.8.0",
	"Time": "2023-11-04T14:37:52Z"
}
{
	"Path": "gopkg.in/yaml.v2",
	"Version": "v2.4.0",
	"Time": "2020-11-17T15:46:20Z",
	"Update": {
		"Path": "gopkg.in/yaml.v2",
		"Version": "v3.0.1",
		"Time": "2022-05-27T08:35:30Z"
	}
}
"#;

fn run(input: &str, options: RunOptions) -> (Result<(), AppError>, String, Option<i32>) {
    let mut output = Vec::new();
    let mut exit = DeferredExit::new();
    let result = Runner::new(options).run(input.as_bytes(), &mut output, &mut exit);
    (result, String::from_utf8(output).unwrap(), exit.code())
}

fn paths(modules: &[Module]) -> Vec<&str> {
    modules.iter().map(|m| m.path.as_str()).collect()
}

mod decode_and_filter {
    use super::*;

    #[test]
    fn test_decode_preserves_order() {
        let modules = decode_modules(GO_LIST_OUTPUT.as_bytes()).unwrap();
        assert_eq!(
            paths(&modules),
            vec![
                "example.com/app",
                "github.com/google/uuid",
                "golang.org/x/text",
                "github.com/spf13/cobra",
                "gopkg.in/yaml.v2",
            ]
        );
    }

    #[test]
    fn test_filter_combinations() {
        let modules = decode_modules(GO_LIST_OUTPUT.as_bytes()).unwrap();

        let all = ModuleFilter::new().apply(&modules);
        assert_eq!(all, modules);

        let updates = ModuleFilter::new().with_update(true).apply(&modules);
        assert_eq!(
            paths(&updates),
            vec!["github.com/google/uuid", "golang.org/x/text", "gopkg.in/yaml.v2"]
        );

        let direct = ModuleFilter::new().with_direct(true).apply(&modules);
        assert!(direct.iter().all(|m| !m.indirect));
        assert_eq!(direct.len(), 4);

        let both = ModuleFilter::new()
            .with_update(true)
            .with_direct(true)
            .apply(&modules);
        assert_eq!(paths(&both), vec!["github.com/google/uuid", "gopkg.in/yaml.v2"]);
    }
}

mod rendering {
    use super::*;

    #[test]
    fn test_default_table_report() {
        let (result, output, _) = run(GO_LIST_OUTPUT, RunOptions::new().with_update(true));
        result.unwrap();

        let lines: Vec<&str> = output.lines().collect();
        // top rule, header, rule, three rows, bottom rule
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("MODULE"));
        assert!(lines[1].contains("VALID TIMESTAMPS"));
        assert!(lines[3].contains("github.com/google/uuid"));
        assert!(lines[3].contains("v1.6.0"));
        assert!(lines[4].contains("false"));
    }

    #[test]
    fn test_markdown_report() {
        let options = RunOptions::new()
            .with_update(true)
            .with_direct(true)
            .with_style(OutputStyle::Markdown);
        let (result, output, _) = run(GO_LIST_OUTPUT, options);
        result.unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1 + 1 + 2);
        assert!(lines[1].starts_with("|---"));
        assert!(lines
            .iter()
            .all(|line| line.starts_with('|') && line.ends_with('|')));
    }

    #[test]
    fn test_json_report_round_trip() {
        let options = RunOptions::new()
            .with_update(true)
            .with_style(OutputStyle::Json);
        let (result, output, _) = run(GO_LIST_OUTPUT, options);
        result.unwrap();

        let expected = ModuleFilter::new()
            .with_update(true)
            .apply(&decode_modules(GO_LIST_OUTPUT.as_bytes()).unwrap());
        let rendered: Vec<Module> = serde_json::from_str(&output).unwrap();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_pretty_report_plain() {
        let options = RunOptions::new()
            .with_update(true)
            .with_style(OutputStyle::Pretty)
            .with_color(false);
        let (result, output, _) = run(GO_LIST_OUTPUT, options);
        result.unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "github.com/google/uuid v1.3.0 -> 1.6.0",
                "golang.org/x/text      v0.3.7 -> 0.14.0",
                "gopkg.in/yaml.v2       v2.4.0 -> 3.0.1",
            ]
        );
    }

    #[test]
    fn test_empty_set_renders_nothing_in_every_style() {
        let input = r#"{"Path": "github.com/spf13/cobra", "Version": "v1.8.0"}"#;
        for style in [
            OutputStyle::Default,
            OutputStyle::Markdown,
            OutputStyle::Json,
            OutputStyle::Pretty,
        ] {
            let options = RunOptions::new().with_update(true).with_style(style);
            let (result, output, _) = run(input, options);
            result.unwrap();
            assert!(output.is_empty(), "style {} wrote output", style);
        }
    }

    #[test]
    fn test_render_without_runner() {
        let modules = vec![Module::new("example.com/a", "v1.0.0")];
        let mut output = Vec::new();
        render(
            &modules,
            OutputConfig::new(OutputStyle::Markdown, false),
            &mut output,
        )
        .unwrap();
        assert!(String::from_utf8(output).unwrap().contains("example.com/a"));
    }
}

mod scenarios {
    use super::*;

    const TWO_MODULES: &str = r#"{"Path": "example.com/a", "Version": "v1.0.0", "Update": {"Path": "example.com/a", "Version": "v1.2.0"}}
{"Path": "example.com/b", "Version": "v2.0.0", "Update": {"Path": "example.com/b", "Version": "v2.0.0"}, "Indirect": true}
"#;

    #[test]
    fn test_minor_update_pretty_scenario() {
        colored::control::set_override(true);
        let options = RunOptions::new()
            .with_update(true)
            .with_style(OutputStyle::Pretty);
        let (result, output, _) = run(TWO_MODULES, options);
        result.unwrap();

        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("\x1b[33mexample.com/a\x1b[0m"));
        assert!(output.contains("-> \x1b[37m1.\x1b[0m\x1b[33m2.\x1b[0m\x1b[37m0\x1b[0m"));
        assert!(!output.contains("example.com/b"));
    }

    #[test]
    fn test_truncated_input_fails_without_output() {
        let input = format!("{}{{\"Path\": \"example.com/c\", \"Vers", TWO_MODULES);
        let options = RunOptions::new().with_exit_with_non_zero(true);
        let (result, output, code) = run(&input, options);
        assert!(matches!(result, Err(AppError::Decode(_))));
        assert!(output.is_empty());
        assert_eq!(code, None);
    }

    #[test]
    fn test_exit_requested_for_outdated() {
        let options = RunOptions::new().with_exit_with_non_zero(true);
        let (result, _, code) = run(TWO_MODULES, options);
        result.unwrap();
        assert_eq!(code, Some(1));
    }

    #[test]
    fn test_exit_not_requested_when_nothing_outdated() {
        let options = RunOptions::new()
            .with_direct(true)
            .with_update(true)
            .with_exit_with_non_zero(true);
        let input = r#"{"Path": "example.com/b", "Version": "v2.0.0", "Indirect": true, "Update": {"Path": "example.com/b", "Version": "v2.1.0"}}"#;
        let (result, output, code) = run(input, options);
        result.unwrap();
        assert!(output.is_empty());
        assert_eq!(code, None);
    }
}
