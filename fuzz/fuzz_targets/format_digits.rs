#![no_main]

use libfuzzer_sys::fuzz_target;
use mask_core::{NumberingPlan, count_digits, extract_digits, format_digits};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    for plan in [NumberingPlan::plus_seven(), NumberingPlan::trunk_eight()] {
        let display = format_digits(&plan, input);
        let normalized = plan.normalize(&extract_digits(input));
        assert_eq!(extract_digits(&display), normalized.digits);
        assert!(count_digits(&display) <= plan.max_digits(normalized.class));
        assert_eq!(format_digits(&plan, &display), display);
    }
});
