//! Visual slots keyed by circular distance.

/// Largest distance the slot table has an entry for.
pub const MAX_VISIBILITY_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRole {
    Center,
    NearLeft,
    NearRight,
    FarLeft,
    FarRight,
    Hidden,
}

/// Stacking layer of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Depth {
    NotRendered,
    Back,
    Mid,
    Front,
}

/// How an item in a given slot is drawn.
///
/// `offset` is a fraction of the item width (`-0.6` is 60% to the left).
/// `rotate_y` is in degrees and `blur` in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotDescriptor {
    pub role: SlotRole,
    pub offset: f32,
    pub scale: f32,
    pub opacity: f32,
    pub depth: Depth,
    pub z_index: u8,
    pub blur: f32,
    pub rotate_y: f32,
}

impl SlotDescriptor {
    pub fn is_visible(&self) -> bool {
        self.role != SlotRole::Hidden
    }

    pub fn offset_percent(&self) -> f32 {
        self.offset * 100.0
    }
}

pub const HIDDEN_SLOT: SlotDescriptor = SlotDescriptor {
    role: SlotRole::Hidden,
    offset: 0.0,
    scale: 0.6,
    opacity: 0.0,
    depth: Depth::NotRendered,
    z_index: 0,
    blur: 4.0,
    rotate_y: 0.0,
};

// Indexed by distance + MAX_VISIBILITY_RADIUS.
const SLOT_TABLE: [SlotDescriptor; 2 * MAX_VISIBILITY_RADIUS + 1] = [
    SlotDescriptor {
        role: SlotRole::FarLeft,
        offset: -0.9,
        scale: 0.5,
        opacity: 0.3,
        depth: Depth::Back,
        z_index: 5,
        blur: 5.0,
        rotate_y: 0.0,
    },
    SlotDescriptor {
        role: SlotRole::NearLeft,
        offset: -0.6,
        scale: 0.75,
        opacity: 0.7,
        depth: Depth::Mid,
        z_index: 10,
        blur: 2.0,
        rotate_y: 15.0,
    },
    SlotDescriptor {
        role: SlotRole::Center,
        offset: 0.0,
        scale: 1.1,
        opacity: 1.0,
        depth: Depth::Front,
        z_index: 20,
        blur: 0.0,
        rotate_y: 0.0,
    },
    SlotDescriptor {
        role: SlotRole::NearRight,
        offset: 0.6,
        scale: 0.75,
        opacity: 0.7,
        depth: Depth::Mid,
        z_index: 10,
        blur: 2.0,
        rotate_y: -15.0,
    },
    SlotDescriptor {
        role: SlotRole::FarRight,
        offset: 0.9,
        scale: 0.5,
        opacity: 0.3,
        depth: Depth::Back,
        z_index: 5,
        blur: 5.0,
        rotate_y: 0.0,
    },
];

/// Slot for `distance` using the full table.
pub fn slot_for(distance: isize) -> SlotDescriptor {
    slot_within(distance, MAX_VISIBILITY_RADIUS)
}

/// Slot for `distance` when only items within `radius` are rendered.
pub fn slot_within(distance: isize, radius: usize) -> SlotDescriptor {
    let radius = radius.min(MAX_VISIBILITY_RADIUS);
    if distance.unsigned_abs() > radius {
        return HIDDEN_SLOT;
    }

    let key = distance + MAX_VISIBILITY_RADIUS as isize;
    SLOT_TABLE[key as usize]
}
