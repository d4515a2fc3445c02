//! Transport mode of a freight document.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shipping/courier category of the parent document.
///
/// The host stores this as a label string ("SEA - LCL IMPORT", ...). Labels
/// outside the known set land in [`TransportMode::Other`] with the original
/// string preserved — pricing skips such modes without raising anything, and
/// modeling them as an explicit variant keeps that skip an auditable branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportMode {
    SeaLclImport,
    SeaLclExport,
    AirImport,
    AirExport,
    CourierImport,
    CourierExport,
    Other(String),
}

impl TransportMode {
    /// Parse a host mode label. Case-insensitive; never fails.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "SEA - LCL IMPORT" => TransportMode::SeaLclImport,
            "SEA - LCL EXPORT" => TransportMode::SeaLclExport,
            "AIR - IMPORT" => TransportMode::AirImport,
            "AIR - EXPORT" => TransportMode::AirExport,
            "COURIER - IMPORT" => TransportMode::CourierImport,
            "COURIER - EXPORT" => TransportMode::CourierExport,
            _ => TransportMode::Other(label.to_string()),
        }
    }

    /// The host label for this mode. Unrecognized labels round-trip as-is.
    pub fn label(&self) -> &str {
        match self {
            TransportMode::SeaLclImport => "SEA - LCL IMPORT",
            TransportMode::SeaLclExport => "SEA - LCL EXPORT",
            TransportMode::AirImport => "AIR - IMPORT",
            TransportMode::AirExport => "AIR - EXPORT",
            TransportMode::CourierImport => "COURIER - IMPORT",
            TransportMode::CourierExport => "COURIER - EXPORT",
            TransportMode::Other(label) => label,
        }
    }

    /// Volumetric-weight divisor: 5000 for courier modes (any label starting
    /// with "COURIER", case-insensitive), 6000 otherwise.
    pub fn volumetric_divisor(&self) -> f64 {
        match self {
            TransportMode::CourierImport | TransportMode::CourierExport => 5000.0,
            TransportMode::Other(label)
                if label
                    .trim()
                    .get(.."COURIER".len())
                    .is_some_and(|p| p.eq_ignore_ascii_case("COURIER")) =>
            {
                5000.0
            }
            _ => 6000.0,
        }
    }

    /// Sea LCL modes price items by total CBM.
    pub fn is_sea_lcl(&self) -> bool {
        matches!(self, TransportMode::SeaLclImport | TransportMode::SeaLclExport)
    }

    /// Air modes price items by chargeable weight.
    pub fn is_air(&self) -> bool {
        matches!(self, TransportMode::AirImport | TransportMode::AirExport)
    }
}

impl Default for TransportMode {
    /// An unset mode behaves like any other unrecognized label.
    fn default() -> Self {
        TransportMode::Other(String::new())
    }
}

impl core::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TransportMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(TransportMode::from_label(&label))
    }
}
