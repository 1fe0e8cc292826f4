use approx::assert_relative_eq;
use raman_rcs::{
    Medium, RamanBand, RefractiveIndex, Wavelength, Wavenumber, au_to_cm6, differential_to_total,
    interpolate_to_wavelength, local_field_correction,
};

#[test]
fn test_computed_cross_section_to_experimental_conditions() {
    let rcs_cm6 = au_to_cm6(37.5);
    let rcs_532 = interpolate_to_wavelength(rcs_cm6, 992.3, 488.0, 532.0);
    let in_medium = rcs_532 * local_field_correction(1.501, 1.498);

    assert_relative_eq!(rcs_cm6, 8.234515559713625e-49, max_relative = 1e-13);
    assert_relative_eq!(rcs_532, 5.750148092132187e-49, max_relative = 1e-13);
    assert_relative_eq!(in_medium, 2.308169355893983e-48, max_relative = 1e-13);
}

#[test]
fn test_local_field_commutes_with_interpolation() {
    let correction = local_field_correction(1.333, 1.336);

    let corrected_first = interpolate_to_wavelength(2.0e-30 * correction, 1001.0, 532.0, 785.0);
    let interpolated_first = interpolate_to_wavelength(2.0e-30, 1001.0, 532.0, 785.0) * correction;

    assert_relative_eq!(corrected_first, interpolated_first, max_relative = 1e-14);
}

#[test]
fn test_total_cross_section_at_new_wavelength() {
    let band = RamanBand {
        frequency: Wavenumber(1001.0),
        depolarization_ratio: 0.1,
    };

    let total = band.total_cross_section(5.0e-31);
    let total_785 = band.interpolate(total, Wavelength(532.0), Wavelength(785.0));

    assert_relative_eq!(total, 4.569589314312422e-30, max_relative = 1e-13);
    assert_relative_eq!(total_785, 8.886250664189377e-31, max_relative = 1e-13);
    assert_eq!(total, differential_to_total(0.1, 5.0e-31));
}

#[test]
fn test_round_trip_between_laser_lines_restores_value() {
    let there = interpolate_to_wavelength(1.0e-29, 1450.0, 457.9, 1064.0);
    let back = interpolate_to_wavelength(there, 1450.0, 1064.0, 457.9);
    assert_relative_eq!(back, 1.0e-29, max_relative = 1e-13);
}

#[test]
fn test_typed_medium_matches_free_function() {
    let medium = Medium {
        excitation: RefractiveIndex(1.5),
        scattering: RefractiveIndex(1.52),
    };
    assert_eq!(medium.local_field_factor(), local_field_correction(1.5, 1.52));
}

#[test]
fn test_functions_are_safe_to_call_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let lambda = 400.0 + 50.0 * i as f64;
                interpolate_to_wavelength(1.0, 992.3, lambda, lambda)
            })
        })
        .collect();

    for handle in handles {
        assert_relative_eq!(handle.join().unwrap(), 1.0, max_relative = 1e-14);
    }
}
