pub struct ReferenceCase<'a> {
    pub name: &'a str,
    pub calculated: f64,
    pub expected: f64,
}

pub fn run_reference_group(group_name: &str, cases: Vec<ReferenceCase>, max_relative_error: f64) {
    let mut group_max_error: f64 = 0.0;

    println!("\nRunning Reference Group: {}", group_name);
    println!("{:-<80}", "");
    println!(
        "{:<32} | {:<20} | {:<20}",
        "Case", "Expected", "Calculated"
    );

    for case in &cases {
        let error = ((case.calculated - case.expected) / case.expected).abs();

        println!(
            "{:<32} | {:<20.12e} | {:<20.12e} (RelErr: {:.2e})",
            case.name, case.expected, case.calculated, error
        );

        group_max_error = group_max_error.max(error);

        assert!(
            error <= max_relative_error,
            "Case '{}' in group '{}': relative error {:.3e} exceeds limit {:.3e}",
            case.name,
            group_name,
            error,
            max_relative_error
        );
    }

    println!("{:-<80}", "");
    println!(
        "  Cases: {}  Max Relative Error: {:.3e} (Limit: {:.3e})",
        cases.len(),
        group_max_error,
        max_relative_error
    );
    println!("{:-<80}\n", "");
}
