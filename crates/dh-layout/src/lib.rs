// ABOUTME: Resizable split-panel layout composition.
// ABOUTME: Computes split positions and interleaves panels with handles.

pub mod split;

pub use split::{
    default_split_positions, sequence_panels, split_container, LayoutError, Orientation,
    PanelSequence, SplitItem,
};
