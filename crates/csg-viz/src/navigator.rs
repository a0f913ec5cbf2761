//! Interactive walk through the BSP tree of the current result.

use csg_bsp::bsp::Node;
use csg_bsp::Point;
use macroquad::prelude::*;

use crate::RenderVisitor;

/// Direction taken at each node in the navigation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Front,
    Back,
}

/// Keeps the path from the root to the subtree being shown.
#[derive(Debug, Default)]
pub struct TreeNavigator {
    path: Vec<Direction>,
}

impl TreeNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current navigation path.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Steps into the given child if it exists. Returns true on success.
    pub fn descend<S>(&mut self, tree: &Node<S>, direction: Direction) -> bool {
        let Some(node) = self.current_node(tree) else {
            return false;
        };
        let child = match direction {
            Direction::Front => node.front(),
            Direction::Back => node.back(),
        };
        if child.is_some() {
            self.path.push(direction);
        }
        child.is_some()
    }

    /// Goes back up one level. Returns false at the root.
    pub fn ascend(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Forgets the path, e.g. after the tree was rebuilt.
    pub fn reset(&mut self) {
        self.path.clear();
    }

    /// Handles keyboard input: F/B descend, P goes to the parent, R to the root.
    pub fn update<S>(&mut self, tree: &Node<S>) {
        if is_key_pressed(KeyCode::F) {
            self.descend(tree, Direction::Front);
        }
        if is_key_pressed(KeyCode::B) {
            self.descend(tree, Direction::Back);
        }
        if is_key_pressed(KeyCode::P) {
            self.ascend();
        }
        if is_key_pressed(KeyCode::R) {
            self.reset();
        }
    }

    /// Returns the node at the end of the path.
    pub fn current_node<'a, S>(&self, tree: &'a Node<S>) -> Option<&'a Node<S>> {
        self.path.iter().try_fold(tree, |node, direction| match direction {
            Direction::Front => node.front(),
            Direction::Back => node.back(),
        })
    }

    /// Draws the current subtree back to front as seen from `eye`.
    pub fn render(&self, tree: &Node<Color>, eye: &Point, wireframe: Option<Color>) {
        if let Some(node) = self.current_node(tree) {
            node.traverse_back_to_front(eye, &mut RenderVisitor { wireframe });
        }
    }

    /// Draws the navigation overlay.
    pub fn draw_ui<S>(&self, tree: &Node<S>, y_offset: f32) {
        let Some(node) = self.current_node(tree) else {
            return;
        };

        let path = if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path
                .iter()
                .map(|d| match d {
                    Direction::Front => "F",
                    Direction::Back => "B",
                })
                .collect::<Vec<_>>()
                .join(" -> ")
        };

        draw_text(
            &format!("Subtree: {} polygons, depth {}", node.polygon_count(), node.depth()),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(&format!("Path: {path}"), 10.0, y_offset + 20.0, 18.0, YELLOW);
        draw_text(
            &format!(
                "Children: {}{}{}",
                if node.front().is_some() { "[F]ront " } else { "" },
                if node.back().is_some() { "[B]ack " } else { "" },
                if node.is_leaf() { "(leaf)" } else { "" }
            ),
            10.0,
            y_offset + 40.0,
            18.0,
            if node.is_leaf() { ORANGE } else { GREEN },
        );
        draw_text("[P]arent | [R]oot", 10.0, y_offset + 60.0, 16.0, DARKGRAY);
    }
}
