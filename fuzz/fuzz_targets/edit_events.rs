#![no_main]

use libfuzzer_sys::fuzz_target;
use mask_core::{EditEvent, PhoneMask, format_digits};

// Byte-coded event stream: the low 3 bits pick the event, the rest carry
// the caret or the typed char.
fn decode(byte: u8, tail: &str) -> Option<EditEvent> {
    Some(match byte & 0b111 {
        0 | 1 => EditEvent::KeyStroke(char::from(b'0' + (byte >> 3) % 10)),
        2 => EditEvent::KeyStroke(char::from(byte >> 1)),
        3 => EditEvent::Backspace,
        4 => EditEvent::ForwardDelete,
        5 => EditEvent::Paste(tail.to_string()),
        6 => EditEvent::ProgrammaticSet(tail.to_string()),
        _ => return None,
    })
}

fuzz_target!(|data: &[u8]| {
    let split = data.iter().position(|&b| b == 0xff).unwrap_or(data.len());
    let (ops, rest) = data.split_at(split);
    let tail = std::str::from_utf8(rest.get(1..).unwrap_or_default()).unwrap_or("");

    let mask = PhoneMask::default();
    let mut text = String::new();
    let mut caret = 0usize;
    for &byte in ops {
        match decode(byte, tail) {
            Some(event) => {
                let out = mask.evaluate(&text, caret, &event);
                assert!(out.new_caret_offset <= out.new_display_text.len());
                assert!(out.new_display_text.is_char_boundary(out.new_caret_offset));
                if out.new_display_text != mask.plan().international_prefix() {
                    assert_eq!(format_digits(mask.plan(), &out.new_display_text), out.new_display_text);
                }
                text = out.new_display_text;
                caret = out.new_caret_offset;
            }
            None => caret = usize::from(byte >> 3).min(text.len()),
        }
    }
});
