//! Filename and content synthesis for the generated ACT-R batch scripts.
//!
//! The Lisp text is reproduced byte-for-byte from the original batch setup,
//! trailing whitespace and tab indentation included. Note the quirk: the
//! output path embedded in the script uses `grid-search-alpha_...` (hyphen)
//! while the script file itself is named `grid-search_alpha_...` (underscore).
//! Downstream tooling depends on both forms, so neither is "fixed" here.

/// On-disk name of the batch script for one grid point.
pub fn script_name(alpha: f64, lf: f64) -> String {
    format!("grid-search_alpha_{:.2}-lf_{:.2}.lisp", alpha, lf)
}

/// The script body: the fixed template with alpha and lf substituted at its
/// four points, each rendered to two decimals.
pub fn render(alpha: f64, lf: f64) -> String {
    format!(
        "\n\
         (load \"/projects/actr/actr7/load-act-r.lisp\")\n\
         (load \"../simon-device.lisp\")\n\
         (load \"../simon-model.lisp\")\n\
         (load \"../simon-simulations.lisp\")\n\
         (with-open-file (out \"grid-search-alpha_{0:.2}-lf_{1:.2}.txt\" :direction :output \n\
         \t\t     :if-exists :overwrite :if-does-not-exist :create)\n\
         \x20 (simulate-psp 100\n\
         \t\tout\n\
         \x20               :alpha {0:.2}\n\
         \x20               :lf {1:.2}))\n\
         \t\t\n",
        alpha, lf
    )
}
