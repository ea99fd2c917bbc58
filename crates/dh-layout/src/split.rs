// ABOUTME: Split-position calculation, panel/handle sequencing, containers.
// ABOUTME: Containers nest: a built container is a valid block one level up.

use dh_markup::tags::div;
use dh_markup::Element;

/// Split axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// CSS class consumed by the client-side resize script.
    pub fn css_class(self) -> &'static str {
        match self {
            Orientation::Horizontal => "h-resizable",
            Orientation::Vertical => "v-resizable",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout requires at least one content block")]
    InvalidLayout,

    #[error("{panels} panels take {expected} split positions, got {got}")]
    LayoutMismatch {
        panels: usize,
        expected: usize,
        got: usize,
    },
}

/// Default proportional boundaries for `count` equally-sized panels:
/// `boundary[i] = (i+1) × 100 / count`.
///
/// Returns `count` values although only the first `count − 1` precede a
/// panel; the trailing boundary is always 100 and is never attached to a
/// handle. The caller side discards it.
pub fn default_split_positions(count: usize) -> Result<Vec<f64>, LayoutError> {
    if count == 0 {
        return Err(LayoutError::InvalidLayout);
    }
    Ok((0..count)
        .map(|i| (i as f64 + 1.0) * 100.0 / count as f64)
        .collect())
}

/// One entry of a panel sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitItem {
    /// A content block wrapped as a layout unit
    Panel(Element),
    /// A resize separator carrying the boundary before the following panel
    Handle(f64),
}

/// Lazy, finite, consuming iterator over the interleaved panels and
/// handles of one split level. For N blocks it yields exactly 2N−1 items:
/// the first panel, then handle/panel pairs.
#[derive(Debug)]
pub struct PanelSequence {
    blocks: std::vec::IntoIter<Element>,
    positions: std::vec::IntoIter<f64>,
    handle_next: bool,
}

impl Iterator for PanelSequence {
    type Item = SplitItem;

    fn next(&mut self) -> Option<SplitItem> {
        if self.handle_next {
            self.handle_next = false;
            // Exactly one position per panel after the first, so the
            // sequence ends here once the positions run out.
            return Some(SplitItem::Handle(self.positions.next()?));
        }
        let block = self.blocks.next()?;
        self.handle_next = true;
        Some(SplitItem::Panel(block))
    }
}

/// Interleave `blocks` with resize handles. `positions` must hold exactly
/// one boundary per gap (N−1 for N blocks); `None` distributes the blocks
/// equally via [`default_split_positions`].
///
/// Both errors are raised here, before any item is produced; a sequence
/// that constructs cannot fail mid-iteration.
pub fn sequence_panels(
    blocks: Vec<Element>,
    positions: Option<Vec<f64>>,
) -> Result<PanelSequence, LayoutError> {
    if blocks.is_empty() {
        return Err(LayoutError::InvalidLayout);
    }
    let gaps = blocks.len() - 1;
    let boundaries = match positions {
        Some(supplied) => {
            if supplied.len() != gaps {
                return Err(LayoutError::LayoutMismatch {
                    panels: blocks.len(),
                    expected: gaps,
                    got: supplied.len(),
                });
            }
            supplied
        }
        None => {
            let mut computed = default_split_positions(blocks.len())?;
            // The final boundary (always 100) precedes no panel.
            computed.truncate(gaps);
            computed
        }
    };
    Ok(PanelSequence {
        blocks: blocks.into_iter(),
        positions: boundaries.into_iter(),
        handle_next: false,
    })
}

/// Build one oriented container from `blocks`, wrapping each in a panel
/// div and each boundary in a handle div.
///
/// The result is a plain element, so it can be passed as a block to an
/// outer call; children are always finished before the parent that holds
/// them, which is what rules out cycles.
pub fn split_container(
    orientation: Orientation,
    blocks: Vec<Element>,
    positions: Option<Vec<f64>>,
) -> Result<Element, LayoutError> {
    let mut container = div().class("container").class(orientation.css_class());
    for item in sequence_panels(blocks, positions)? {
        container = container.child(match item {
            SplitItem::Panel(block) => div().class("panel").child(block),
            SplitItem::Handle(position) => div()
                .class("handle")
                .attr("data-default-split-position", position),
        });
    }
    Ok(container)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: &str) -> Element {
        div().id(id)
    }

    #[test]
    fn default_positions_are_cumulative_equal_shares() {
        assert_eq!(
            default_split_positions(3).unwrap(),
            vec![100.0 / 3.0, 200.0 / 3.0, 100.0]
        );
        assert_eq!(
            default_split_positions(4).unwrap(),
            vec![25.0, 50.0, 75.0, 100.0]
        );
        assert_eq!(default_split_positions(1).unwrap(), vec![100.0]);
    }

    #[test]
    fn zero_blocks_is_invalid() {
        assert_eq!(
            default_split_positions(0),
            Err(LayoutError::InvalidLayout)
        );
        assert!(matches!(
            sequence_panels(vec![], None),
            Err(LayoutError::InvalidLayout)
        ));
        assert!(matches!(
            split_container(Orientation::Horizontal, vec![], None),
            Err(LayoutError::InvalidLayout)
        ));
    }

    #[test]
    fn sequence_alternates_panels_and_handles() {
        let items: Vec<SplitItem> =
            sequence_panels(vec![block("a"), block("b"), block("c")], None)
                .unwrap()
                .collect();
        assert_eq!(items.len(), 5);
        for (i, item) in items.iter().enumerate() {
            match item {
                SplitItem::Panel(_) => assert_eq!(i % 2, 0),
                SplitItem::Handle(_) => assert_eq!(i % 2, 1),
            }
        }
        // Panels come out in input order
        assert_eq!(items[0], SplitItem::Panel(block("a")));
        assert_eq!(items[2], SplitItem::Panel(block("b")));
        assert_eq!(items[4], SplitItem::Panel(block("c")));
    }

    #[test]
    fn handles_carry_the_preceding_boundary() {
        let items: Vec<SplitItem> = sequence_panels(
            vec![block("a"), block("b"), block("c")],
            Some(vec![10.0, 40.0]),
        )
        .unwrap()
        .collect();
        assert_eq!(items[1], SplitItem::Handle(10.0));
        assert_eq!(items[3], SplitItem::Handle(40.0));
    }

    #[test]
    fn computed_handles_skip_the_trailing_boundary() {
        let items: Vec<SplitItem> = sequence_panels(vec![block("a"), block("b")], None)
            .unwrap()
            .collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], SplitItem::Handle(50.0));
    }

    #[test]
    fn single_block_yields_one_panel_and_no_handles() {
        let items: Vec<SplitItem> = sequence_panels(vec![block("only")], None)
            .unwrap()
            .collect();
        assert_eq!(items, vec![SplitItem::Panel(block("only"))]);
    }

    #[test]
    fn mismatched_position_count_fails_fast() {
        let too_few = sequence_panels(
            vec![block("a"), block("b"), block("c")],
            Some(vec![30.0]),
        );
        assert_eq!(
            too_few.err().map(|e| match e {
                LayoutError::LayoutMismatch {
                    panels,
                    expected,
                    got,
                } => (panels, expected, got),
                _ => panic!("wrong error kind"),
            }),
            Some((3, 2, 1))
        );

        let too_many = sequence_panels(
            vec![block("a"), block("b"), block("c")],
            Some(vec![25.0, 50.0, 75.0]),
        );
        assert!(matches!(
            too_many,
            Err(LayoutError::LayoutMismatch {
                panels: 3,
                expected: 2,
                got: 3
            })
        ));
    }

    #[test]
    fn container_class_follows_orientation() {
        let h = split_container(Orientation::Horizontal, vec![block("a")], None).unwrap();
        assert!(h.render().starts_with("<div class=\"container h-resizable\">"));
        let v = split_container(Orientation::Vertical, vec![block("a")], None).unwrap();
        assert!(v.render().starts_with("<div class=\"container v-resizable\">"));
    }

    #[test]
    fn handle_attribute_serializes_exact_positions() {
        let explicit =
            split_container(Orientation::Horizontal, vec![block("a"), block("b")], Some(vec![30.0]))
                .unwrap()
                .render();
        assert!(explicit.contains("<div class=\"handle\" data-default-split-position=\"30\"></div>"));

        let computed = split_container(
            Orientation::Horizontal,
            vec![block("a"), block("b"), block("c")],
            None,
        )
        .unwrap()
        .render();
        assert!(computed.contains("data-default-split-position=\"33.333333333333336\""));
        assert!(computed.contains("data-default-split-position=\"66.66666666666667\""));
        assert!(!computed.contains("data-default-split-position=\"100\""));
    }

    #[test]
    fn nesting_preserves_the_inner_container() {
        let inner =
            split_container(Orientation::Horizontal, vec![block("a"), block("b")], None).unwrap();
        let inner_html = inner.render();

        let outer =
            split_container(Orientation::Vertical, vec![inner, block("d")], None).unwrap();
        let outer_html = outer.render();

        // The inner structure appears unchanged, wrapped as the first panel
        assert!(outer_html.contains(&format!("<div class=\"panel\">{inner_html}</div>")));
    }

    #[test]
    fn independent_builds_share_nothing() {
        let make = || {
            split_container(Orientation::Horizontal, vec![block("a"), block("b")], None).unwrap()
        };
        let first = make();
        let snapshot = first.render();
        let second = make().child(div().id("extra"));
        assert!(second.render().contains("extra"));
        assert_eq!(first.render(), snapshot);
    }
}
