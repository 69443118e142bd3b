//! Internal error handling macros.

/// Displays a system error message and aborts the program.
///
/// Use this for unrecoverable errors that indicate bugs in the crate itself,
/// such as taking the logarithm of a pid space that skipped rounding. The
/// program prints a diagnostic message and immediately aborts without
/// unwinding.
///
/// # Examples
///
/// ```ignore
/// if !size.is_power_of_two() {
///   fatal!("pid space is not a power of two");
/// }
/// ```
macro_rules! fatal {
  ($error:expr) => {{
    ::std::eprintln!(
      "{}:{}: (SysInv) a system invariant has been broken: {}",
      ::std::file!(),
      ::std::line!(),
      $error,
    );

    ::std::process::abort();
  }};
}

pub(crate) use fatal;
