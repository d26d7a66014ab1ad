use num_complex::Complex64;

//=====================================================================
// Complex Faddeeva function w(z) = exp(-z^2) erfc(-iz), evaluated
// with the Humlicek w4 rational approximation (relative error below
// ~1e-4 over the upper half plane). The Doppler-broadened SLBW line
// shapes are the real and imaginary parts of a scaled w(z).
//=====================================================================

/// Evaluate w(z). Arguments in the lower half plane are folded up
/// with the identity `w(z) + w(-z) = 2 exp(-z^2)`.
pub fn faddeeva(z: Complex64) -> Complex64 {
    if z.im < 0.0 {
        return 2.0 * (-z * z).exp() - faddeeva(-z);
    }
    humlicek_w4(z)
}

// Humlicek's four-region rational approximation, valid for Im(z) >= 0.
fn humlicek_w4(z: Complex64) -> Complex64 {
    let t = Complex64::new(z.im, -z.re);
    let s = z.re.abs() + z.im;

    if s >= 15.0 {
        // Region I: single-pole approximation.
        t * 0.5641896 / (0.5 + t * t)
    } else if s >= 5.5 {
        // Region II.
        let u = t * t;
        t * (1.410474 + u * 0.5641896) / (0.75 + u * (3.0 + u))
    } else if z.im >= 0.195 * z.re.abs() - 0.176 {
        // Region III.
        (16.4955 + t * (20.20933 + t * (11.96482 + t * (3.778987 + t * 0.5642236))))
            / (16.4955 + t * (38.82363 + t * (39.27121 + t * (21.69274 + t * (6.699398 + t)))))
    } else {
        // Region IV: near the real axis, where cancellation is worst.
        let u = t * t;
        let numerator = t
            * (36183.31
                - u * (3321.9905
                    - u * (1540.787
                        - u * (219.0313 - u * (35.76683 - u * (1.320522 - u * 0.56419))))));
        let denominator = 32066.6
            - u * (24322.84
                - u * (9022.228
                    - u * (2186.181 - u * (364.2191 - u * (61.57037 - u * (1.841439 - u))))));
        u.exp() - numerator / denominator
    }
}
