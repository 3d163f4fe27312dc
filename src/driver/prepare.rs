//! Load, desugar and render a program according to the options
use crate::common::prettify::prettify_width;
use crate::core::desugar::{desugar_content, verify_program, Content};
use crate::core::expr::Program;
use crate::driver::error::DriverError;
use crate::driver::options::{DesugarOptions, OutputFormat};
use crate::driver::source::SourceLoader;
use log::debug;
use std::time::Instant;

use super::statistics::Timings;

/// Use the loader to read the inputs and desugar them into a program
pub fn prepare(
    opt: &DesugarOptions,
    loader: &mut SourceLoader,
    stats: &mut Timings,
) -> Result<Program, DriverError> {
    let tree = {
        let t = Instant::now();

        if let Some(source) = opt.source() {
            loader.load_source(source)?;
        }
        let tree = loader.load_tree(opt.tree())?;

        stats.record("load", t.elapsed());
        tree
    };

    let settings = opt.settings();

    let program = {
        let t = Instant::now();

        let content = Content::new(loader.source().unwrap_or_default(), &tree);
        let program = desugar_content(&content, settings)?;

        stats.record("desugar", t.elapsed());
        program
    };

    {
        let t = Instant::now();

        verify_program(&program, settings);

        stats.record("verify", t.elapsed());
    }

    debug!("program has {} literals", program.literals.len());
    Ok(program)
}

/// Render the program in the format the options ask for
pub fn render(program: &Program, opt: &DesugarOptions) -> Result<String, DriverError> {
    match opt.format() {
        OutputFormat::Pretty => Ok(prettify_width(program, opt.width())),
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(program)?;
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Debug => Ok(format!("{:#?}\n", program)),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use matches::assert_matches;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("bindsugar-{}-{}", std::process::id(), name));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    const TREE: &str = r#"[
      { "pos": 0, "kind": { "call": {
          "callee": { "pos": 0, "kind": { "var": "f" } },
          "args": [ { "pos": 2, "kind": { "atom": "a" } } ] } } }
    ]"#;

    #[test]
    pub fn test_prepare_and_render() {
        let path = write_temp("ok.json", TREE);
        let opt = DesugarOptions::default()
            .with_tree(path.display().to_string())
            .with_value("f");
        let mut loader = SourceLoader::default();
        let mut stats = Timings::default();
        let program = prepare(&opt, &mut loader, &mut stats).unwrap();

        assert_eq!(render(&program, &opt).unwrap(), "λ. (#1 a)\n");
        assert_eq!(
            stats.phases().collect::<Vec<_>>(),
            vec!["load", "desugar", "verify"]
        );

        let json = render(&program, &opt.clone().with_format(OutputFormat::Json)).unwrap();
        let back: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(back, program);
    }

    #[test]
    pub fn test_unresolved_name_is_reported() {
        let path = write_temp("unresolved.json", TREE);
        let opt = DesugarOptions::default().with_tree(path.display().to_string());
        let mut loader = SourceLoader::default();
        let mut stats = Timings::default();
        assert_matches!(
            prepare(&opt, &mut loader, &mut stats),
            Err(DriverError::Core(_))
        );
    }
}
