//! Plain data row types written by output backends.

/// One vehicle's position at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehiclePositionRow {
    pub tick:       u64,
    pub vehicle_id: u32,
    pub position:   u32,
}

/// One light's phase at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightStateRow {
    pub tick:     u64,
    pub light_id: u32,
    /// 0 = RED, 1 = GREEN, 2 = YELLOW.
    pub phase:    u8,
}
