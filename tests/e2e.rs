use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;

use serde_json;
use structopt::StructOpt;

use kvmetrics::cliopt::CliOpt;
use kvmetrics::error::ErrorKind;
use kvmetrics::output::{LineWriter, Writer};
use kvmetrics::runner::Runner;

#[test]
fn e2e() -> Result<(), Box<dyn std::error::Error>> {
    let root_test_dir = Path::new(file!()).parent().unwrap().join("scenarios");

    for test_dir in fs::read_dir(&root_test_dir)? {
        let test_dir = test_dir?.path();

        if let Ok(filter) = std::env::var("E2E_CASE") {
            if !test_dir.as_os_str().to_string_lossy().ends_with(&filter) {
                continue;
            }
        }

        let cli_args: Vec<String> =
            serde_json::from_str(&fs::read_to_string(test_dir.join("args.json"))?)?;

        let input = fs::read_to_string(test_dir.join("input"))?;
        let (result, actual_output) = analyze(&input, &cli_args);
        result?;

        let expected_output = fs::read(test_dir.join("output"))?;

        assert_eq!(
            expected_output,
            actual_output,
            "\nUnexpected report in '{}'.\nExpected:\n{}\nActual:\n{}",
            test_dir.display(),
            String::from_utf8_lossy(&expected_output),
            String::from_utf8_lossy(&actual_output),
        );
    }

    Ok(())
}

#[test]
fn e2e_missing_key_writes_nothing() {
    let input = concat!(
        "http_server_requests_seconds_count{method=\"GET\",outcome=\"SUCCESS\",status=\"200\",uri=\"/kvstore/v1/{db_name}/{table_name}\",} 1.0\n",
        "http_server_requests_seconds_sum{method=\"GET\",outcome=\"SUCCESS\",status=\"200\",uri=\"/kvstore/v1/{db_name}/{table_name}\",} 1.0\n",
    );

    let (result, output) = analyze(input, &["kvmetrics".to_string()]);

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert!(err.message().contains("method=\"PUT\""), "{}", err);
    assert!(output.is_empty());
}

#[test]
fn e2e_malformed_line_writes_nothing() {
    let input = "system_cpu_count 8.0\njvm_threads_peak_threads\n";

    let (result, output) = analyze(input, &["kvmetrics".to_string()]);

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.message().starts_with("line 2:"), "{}", err);
    assert!(output.is_empty());
}

#[test]
fn e2e_blank_line_writes_nothing() {
    let input = "system_cpu_count 8.0\n\njvm_threads_peak_threads 9.0\n";

    let (result, output) = analyze(input, &["kvmetrics".to_string()]);

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.message().starts_with("line 2:"), "{}", err);
    assert!(output.is_empty());
}

fn analyze(input: &str, cli_args: &[String]) -> (kvmetrics::error::Result<()>, Vec<u8>) {
    let opt = CliOpt::from_iter(cli_args);

    let writer = Rc::new(RefCell::new(LineWriter::new(Vec::new())));

    struct TestWriter<W>(Rc<RefCell<W>>);

    impl<W: Writer> Writer for TestWriter<W> {
        fn write(&mut self, buf: &[u8]) -> io::Result<()> {
            self.0.borrow_mut().write(buf)
        }
    }

    let mut runner = Runner::new(
        Box::new(TestWriter(Rc::clone(&writer))),
        opt.encoder(),
        opt.lookup_mode(),
        !opt.quiet,
    );

    let result = runner.run(input);

    // To make Rc::try_unwrap(writer) work.
    drop(runner);

    let writer = match Rc::try_unwrap(writer) {
        Ok(writer) => writer,
        _ => unreachable!(),
    };

    (result, writer.into_inner().into_inner())
}
