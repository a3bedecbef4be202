//! Turn-by-turn instructions for a resolved path.
//!
//! Instruction text is Spanish, matching the campus front end:
//!
//! | Maneuver | Text |
//! |----------|------|
//! | [`Maneuver::ClimbStairs`] | `Sube escaleras al Piso <n>` |
//! | [`Maneuver::DescendStairs`] | `Baja escaleras al Piso <n>` |
//! | [`Maneuver::Arrive`] | `Llega a <label>` |
//! | [`Maneuver::WalkThrough`] | `Camina por <label>` |
//! | [`Maneuver::WalkToward`] | `Camina hacia <label>` |

use serde::{Deserialize, Serialize};

use crate::graph::Node;

/// What the user does on one leg of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Maneuver {
    /// Go up to a higher floor
    ClimbStairs,
    /// Go down to a lower floor
    DescendStairs,
    /// Final leg
    Arrive,
    /// Pass through a corridor waypoint
    WalkThrough,
    /// Head toward a named place that is not the destination
    WalkToward,
}

impl Maneuver {
    /// Classify the leg `from -> to`.
    ///
    /// A floor change takes priority over arrival, so a route ending on
    /// the far side of a staircase ends with a stairs instruction.
    pub fn classify(from: &Node, to: &Node, is_last: bool) -> Self {
        if from.floor != to.floor {
            if to.floor > from.floor {
                Maneuver::ClimbStairs
            } else {
                Maneuver::DescendStairs
            }
        } else if is_last {
            Maneuver::Arrive
        } else if to.is_corridor() {
            Maneuver::WalkThrough
        } else {
            Maneuver::WalkToward
        }
    }

    /// Human-readable instruction for a leg ending at `to`.
    pub fn instruction(self, to: &Node) -> String {
        match self {
            Maneuver::ClimbStairs => format!("Sube escaleras al Piso {}", to.floor),
            Maneuver::DescendStairs => format!("Baja escaleras al Piso {}", to.floor),
            Maneuver::Arrive => format!("Llega a {}", to.label),
            Maneuver::WalkThrough => format!("Camina por {}", to.label),
            Maneuver::WalkToward => format!("Camina hacia {}", to.label),
        }
    }

    /// True for stair maneuvers.
    #[inline]
    pub fn is_floor_change(self) -> bool {
        matches!(self, Maneuver::ClimbStairs | Maneuver::DescendStairs)
    }
}

/// One leg of a route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationStep {
    /// Leg start node id
    pub from_node_id: String,
    /// Leg end node id
    pub to_node_id: String,
    /// Leg start label
    pub from_label: String,
    /// Leg end label
    pub to_label: String,
    /// Floor the leg is shown on (destination floor for stair legs)
    pub floor: i32,
    /// True if the leg changes floor
    pub floor_change: bool,
    /// Display text
    pub instruction: String,
    /// Leg classification the instruction was derived from
    pub maneuver: Maneuver,
}

impl NavigationStep {
    /// Describe the leg `from -> to`.
    pub fn new(from: &Node, to: &Node, is_last: bool) -> Self {
        let maneuver = Maneuver::classify(from, to, is_last);
        let floor_change = maneuver.is_floor_change();
        Self {
            from_node_id: from.id.clone(),
            to_node_id: to.id.clone(),
            from_label: from.label.clone(),
            to_label: to.label.clone(),
            floor: if floor_change { to.floor } else { from.floor },
            floor_change,
            instruction: maneuver.instruction(to),
            maneuver,
        }
    }
}

/// One step per consecutive pair of `path`.
pub fn build_steps(path: &[&Node]) -> Vec<NavigationStep> {
    let legs = path.len().saturating_sub(1);
    path.windows(2)
        .enumerate()
        .map(|(i, pair)| NavigationStep::new(pair[0], pair[1], i + 1 == legs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    fn node(id: &str, kind: NodeKind, floor: i32) -> Node {
        Node::new(id, format!("Label {}", id), kind, floor, 0.0, 0.0)
    }

    #[test]
    fn test_stairs_up_and_down() {
        let low = node("s0", NodeKind::Stairs, 0);
        let high = node("s2", NodeKind::Stairs, 2);

        let up = NavigationStep::new(&low, &high, false);
        assert!(up.floor_change);
        assert_eq!(up.floor, 2);
        assert_eq!(up.instruction, "Sube escaleras al Piso 2");
        assert_eq!(up.maneuver, Maneuver::ClimbStairs);

        let down = NavigationStep::new(&high, &low, false);
        assert_eq!(down.floor, 0);
        assert_eq!(down.instruction, "Baja escaleras al Piso 0");
    }

    #[test]
    fn test_floor_change_beats_arrival() {
        let low = node("s0", NodeKind::Stairs, 0);
        let high = node("s1", NodeKind::Stairs, 1);
        let step = NavigationStep::new(&low, &high, true);
        assert_eq!(step.instruction, "Sube escaleras al Piso 1");
    }

    #[test]
    fn test_same_floor_texts() {
        let a = node("a", NodeKind::Entrance, 1);
        let hall = node("h", NodeKind::Corridor, 1);
        let room = node("r", NodeKind::Office, 1);

        let walk_by = NavigationStep::new(&a, &hall, false);
        assert_eq!(walk_by.instruction, "Camina por Label h");
        assert_eq!(walk_by.floor, 1);
        assert!(!walk_by.floor_change);

        assert_eq!(
            NavigationStep::new(&hall, &room, false).instruction,
            "Camina hacia Label r"
        );
        // Arrival wins over the corridor rule
        assert_eq!(
            NavigationStep::new(&a, &hall, true).instruction,
            "Llega a Label h"
        );
    }

    #[test]
    fn test_build_steps_marks_last_leg() {
        let a = node("a", NodeKind::Entrance, 0);
        let h = node("h", NodeKind::Corridor, 0);
        let r = node("r", NodeKind::Classroom, 0);
        let steps = build_steps(&[&a, &h, &r]);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].maneuver, Maneuver::WalkThrough);
        assert_eq!(steps[1].maneuver, Maneuver::Arrive);
        assert!(build_steps(&[&a]).is_empty());
    }

    #[test]
    fn test_floor_change_flag_follows_maneuver() {
        let s0 = node("s0", NodeKind::Stairs, 0);
        let s1 = node("s1", NodeKind::Stairs, 1);
        let h1 = node("h1", NodeKind::Corridor, 1);
        let r1 = node("r1", NodeKind::Classroom, 1);
        let steps = build_steps(&[&h1, &s1, &s0, &s1, &h1, &r1]);

        for step in &steps {
            assert_eq!(step.floor_change, step.maneuver.is_floor_change());
        }
        let changes: Vec<bool> = steps.iter().map(|s| s.floor_change).collect();
        assert_eq!(changes, vec![false, true, true, false, false]);
    }

    #[test]
    fn test_serialized_field_names() {
        let a = node("a", NodeKind::Entrance, 0);
        let b = node("b", NodeKind::Classroom, 0);
        let json = serde_json::to_string(&NavigationStep::new(&a, &b, true)).unwrap();

        assert!(json.contains(r#""fromNodeId":"a""#));
        assert!(json.contains(r#""floorChange":false"#));
        assert!(json.contains(r#""maneuver":"arrive""#));
    }
}
