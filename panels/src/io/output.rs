use circle_pack::io::ext_repr::ExtPlacementReport;
use serde::{Deserialize, Serialize};

use crate::config::PanelConfig;

/// Contents of the JSON file written for every panel
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PanelOutput {
    pub config: PanelConfig,
    pub report: ExtPlacementReport,
}
