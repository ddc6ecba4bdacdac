#![no_main]
use jsonvet::{Lexer, ParserOptions, parse_with_options};
use libfuzzer_sys::fuzz_target;

fn parser(data: &[u8]) {
    let Some((&flags, data)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(data);

    // Low bits pick a nesting limit, including 0.
    let options = ParserOptions {
        max_depth: usize::from(flags & 0x3F),
    };

    let mut last = None;
    for token in Lexer::new(&text) {
        match token {
            Ok(_) => {}
            Err(err) => {
                last = Some(err);
                break;
            }
        }
    }
    if let Some(err) = last {
        assert!(err.line >= 1 && err.column >= 1, "{err}");
        assert!(err.is_lexical());
    }

    match parse_with_options(&text, options) {
        Ok(value) => assert!(value.is_array() || value.is_object()),
        Err(err) => {
            assert!(err.line >= 1 && err.column >= 1, "{err}");
            assert_eq!(
                err.to_string(),
                format!("{} at {}:{}", err.message(), err.line, err.column)
            );
        }
    }
}

fuzz_target!(|data: &[u8]| parser(data));
