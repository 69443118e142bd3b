use crate::env::Properties;
use crate::env::Property;
use crate::probe::Probe;
use crate::probe::first_match;

/// Ordered sources for the 64-vs-32-bit determination.
///
/// 1. The vendor bit mode, if set, must equal `64`.
/// 2. The data model, if set, must equal `64`.
/// 3. The runtime version, if set, must contain `_64`.
///
/// The first source present decides. With none present the platform is
/// assumed to be 32-bit.
pub const BITNESS_PROBES: &[Probe<Properties, bool>] = &[
  Probe::new("vm-bitmode", probe_vm_bit_mode),
  Probe::new("data-model", probe_data_model),
  Probe::new("vm-version", probe_vm_version),
];

/// Returns `true` if `properties` describe a 64-bit platform.
pub fn is_64bit(properties: &Properties) -> bool {
  first_match(BITNESS_PROBES, properties).is_some_and(|(_, value)| value)
}

fn probe_vm_bit_mode(properties: &Properties) -> Option<bool> {
  properties.get(Property::VmBitMode).map(|value| value == "64")
}

fn probe_data_model(properties: &Properties) -> Option<bool> {
  properties.get(Property::DataModel).map(|value| value == "64")
}

fn probe_vm_version(properties: &Properties) -> Option<bool> {
  properties.get(Property::VmVersion).map(|value| value.contains("_64"))
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_vendor_bit_mode() {
    let properties: Properties = Properties::new().with(Property::VmBitMode, "64");
    assert!(is_64bit(&properties));
  }

  #[test]
  fn test_vendor_bit_mode_wins() {
    let properties: Properties = Properties::new()
      .with(Property::VmBitMode, "32")
      .with(Property::DataModel, "64")
      .with(Property::VmVersion, "25.1-b02_64");

    assert!(!is_64bit(&properties));
  }

  #[test]
  fn test_data_model() {
    let properties: Properties = Properties::new().with(Property::DataModel, "32");
    assert!(!is_64bit(&properties));

    let properties: Properties = Properties::new().with(Property::DataModel, "64");
    assert!(is_64bit(&properties));
  }

  #[test]
  fn test_vm_version() {
    let properties: Properties = Properties::new().with(Property::VmVersion, "1.8.0_64");
    assert!(is_64bit(&properties));

    let properties: Properties = Properties::new().with(Property::VmVersion, "1.8.0");
    assert!(!is_64bit(&properties));
  }

  #[test]
  fn test_default() {
    assert!(!is_64bit(&Properties::new()));
  }

  #[test]
  fn test_probe_names() {
    let names: Vec<&str> = BITNESS_PROBES.iter().map(Probe::name).collect();
    assert_eq!(names, ["vm-bitmode", "data-model", "vm-version"]);
  }
}
