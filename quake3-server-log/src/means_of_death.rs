//! The means of death, as enumerated by the Quake 3 server in `meansOfDeath_t`


/// Name given to the reason codes not present in [MEANS_OF_DEATH]
pub const UNKNOWN_MEAN_OF_DEATH: &str = "UNKNOWN";

/// Indexed by the reason code found in `Kill` events
pub const MEANS_OF_DEATH: [&str; 29] = [
    "MOD_UNKNOWN",
    "MOD_SHOTGUN",
    "MOD_GAUNTLET",
    "MOD_MACHINEGUN",
    "MOD_GRENADE",
    "MOD_GRENADE_SPLASH",
    "MOD_ROCKET",
    "MOD_ROCKET_SPLASH",
    "MOD_PLASMA",
    "MOD_PLASMA_SPLASH",
    "MOD_RAILGUN",
    "MOD_LIGHTNING",
    "MOD_BFG",
    "MOD_BFG_SPLASH",
    "MOD_WATER",
    "MOD_SLIME",
    "MOD_LAVA",
    "MOD_CRUSH",
    "MOD_TELEFRAG",
    "MOD_FALLING",
    "MOD_SUICIDE",
    "MOD_TARGET_LASER",
    "MOD_TRIGGER_HURT",
    "MOD_NAIL",
    "MOD_CHAINGUN",
    "MOD_PROXIMITY_MINE",
    "MOD_KAMIKAZE",
    "MOD_JUICED",
    "MOD_GRAPPLE",
];

/// Returns the name for the given `reason_id` or `None` if the code is not known
pub fn try_mean_of_death_name(reason_id: u32) -> Option<&'static str> {
    usize::try_from(reason_id).ok()
        .and_then(|index| MEANS_OF_DEATH.get(index))
        .copied()
}

/// Returns the name for the given `reason_id`, falling back to [UNKNOWN_MEAN_OF_DEATH]
pub fn mean_of_death_name(reason_id: u32) -> &'static str {
    try_mean_of_death_name(reason_id)
        .unwrap_or(UNKNOWN_MEAN_OF_DEATH)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(mean_of_death_name(0), "MOD_UNKNOWN");
        assert_eq!(mean_of_death_name(6), "MOD_ROCKET");
        assert_eq!(mean_of_death_name(10), "MOD_RAILGUN");
        assert_eq!(mean_of_death_name(19), "MOD_FALLING");
        assert_eq!(mean_of_death_name(22), "MOD_TRIGGER_HURT");
        assert_eq!(mean_of_death_name(28), "MOD_GRAPPLE");
    }

    #[test]
    fn unmapped_codes() {
        assert_eq!(try_mean_of_death_name(29), None);
        assert_eq!(mean_of_death_name(29), UNKNOWN_MEAN_OF_DEATH);
        assert_eq!(mean_of_death_name(u32::MAX), UNKNOWN_MEAN_OF_DEATH);
    }
}
