//! License metadata used to group registry licenses (OSI, FSF, deprecated ids).

use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseCatalog {
    /// Known license ids, in catalog order.
    pub licenses: Vec<String>,
    pub osi_approved: BTreeSet<String>,
    pub fsf_approved: BTreeSet<String>,
    pub deprecated: BTreeSet<String>,
}

/// One record of the SPDX `licenses.json` list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxLicense {
    pub license_id: String,
    #[serde(default)]
    pub is_osi_approved: bool,
    #[serde(default)]
    pub is_fsf_libre: bool,
    #[serde(default)]
    pub is_deprecated_license_id: bool,
}

#[derive(Debug, Deserialize)]
pub struct SpdxLicenseList {
    pub licenses: Vec<SpdxLicense>,
}

impl From<SpdxLicenseList> for LicenseCatalog {
    fn from(list: SpdxLicenseList) -> Self {
        let mut catalog = LicenseCatalog::default();
        for license in list.licenses {
            if license.is_osi_approved {
                catalog.osi_approved.insert(license.license_id.clone());
            }
            if license.is_fsf_libre {
                catalog.fsf_approved.insert(license.license_id.clone());
            }
            if license.is_deprecated_license_id {
                catalog.deprecated.insert(license.license_id.clone());
            }
            catalog.licenses.push(license.license_id);
        }
        catalog
    }
}
