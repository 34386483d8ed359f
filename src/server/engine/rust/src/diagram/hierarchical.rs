/* src/server/engine/rust/src/diagram/hierarchical.rs */

use insighthunt_core::VisualizationType;
use maud::{Markup, html};
use serde::Deserialize;

use super::{Diagram, DiagramInput, truncate_chars};

const NODE_EMOJI: [&str; 5] = ["1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣"];
const MAX_TREE_DEPTH: usize = 4;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MindMapData {
  #[serde(default)]
  center_text: Option<String>,
  #[serde(default)]
  center_emoji: Option<String>,
  nodes: Vec<MindMapNode>,
}

#[derive(Deserialize)]
struct MindMapNode {
  text: String,
  #[serde(default)]
  emoji: Option<String>,
}

/// Default renderer for methodologies without a usable visualization type.
pub(super) struct MindMap;

impl Diagram for MindMap {
  fn kind(&self) -> VisualizationType {
    VisualizationType::MindMap
  }

  fn title_key(&self) -> &'static str {
    "diagram.mind_map"
  }

  fn icon(&self) -> &'static str {
    "🧠"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let data = match input.data_as::<MindMapData>() {
      Some(d) if !d.nodes.is_empty() => d,
      _ => MindMapData {
        center_text: None,
        center_emoji: None,
        nodes: input
          .steps()
          .iter()
          .take(NODE_EMOJI.len())
          .map(|s| MindMapNode { text: truncate_chars(s, 40), emoji: None })
          .collect(),
      },
    };
    let center = data.center_text.unwrap_or_else(|| truncate_chars(input.name, 25));
    html! {
      div class="mind-map" {
        div class="mind-map-center" {
          span class="mind-map-emoji" { (data.center_emoji.as_deref().unwrap_or("💡")) }
          strong { (center) }
        }
        ul class="mind-map-nodes" {
          @for (i, node) in data.nodes.iter().enumerate() {
            li class="mind-map-node" {
              span class="mind-map-emoji" {
                (node.emoji.as_deref().or(NODE_EMOJI.get(i).copied()).unwrap_or("•"))
              }
              " " (node.text)
            }
          }
        }
      }
    }
  }
}

#[derive(Deserialize)]
struct TreeData {
  root: TreeNode,
}

#[derive(Deserialize)]
struct TreeNode {
  label: String,
  #[serde(default)]
  children: Vec<TreeNode>,
}

pub(super) struct TreeDiagram;

impl Diagram for TreeDiagram {
  fn kind(&self) -> VisualizationType {
    VisualizationType::TreeDiagram
  }

  fn title_key(&self) -> &'static str {
    "diagram.tree"
  }

  fn icon(&self) -> &'static str {
    "🌳"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let root = match input.data_as::<TreeData>() {
      Some(d) => d.root,
      None => TreeNode {
        label: truncate_chars(input.name, 30),
        children: input
          .steps()
          .iter()
          .map(|s| TreeNode { label: truncate_chars(s, 30), children: Vec::new() })
          .collect(),
      },
    };
    html! {
      ul class="tree" { (tree_node(&root, 0)) }
    }
  }
}

fn tree_node(node: &TreeNode, depth: usize) -> Markup {
  html! {
    li class={ "tree-node depth-" (depth) } {
      span class="tree-label" { (node.label) }
      @if !node.children.is_empty() && depth < MAX_TREE_DEPTH {
        ul {
          @for child in &node.children { (tree_node(child, depth + 1)) }
        }
      }
    }
  }
}

#[derive(Deserialize)]
struct Leveled {
  levels: Vec<Level>,
}

#[derive(Deserialize)]
struct Level {
  label: String,
  #[serde(default)]
  description: Option<String>,
}

/// Levels are listed bottom to top and drawn top first.
pub(super) struct Pyramid;

impl Diagram for Pyramid {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Pyramid
  }

  fn title_key(&self) -> &'static str {
    "diagram.pyramid"
  }

  fn icon(&self) -> &'static str {
    "🔺"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let levels = match input.data_as::<Leveled>() {
      Some(d) if !d.levels.is_empty() => d.levels,
      _ => input
        .steps()
        .iter()
        .take(4)
        .map(|s| Level { label: truncate_chars(s, 30), description: None })
        .collect(),
    };
    let n = levels.len().max(1);
    html! {
      div class="pyramid" {
        @for (i, level) in levels.iter().rev().enumerate() {
          @let width = 40 + i * 50 / n;
          div class={ "pyramid-level level-" (n - 1 - i) } style={ "width:" (width) "%" } {
            strong { (level.label) }
            @if let Some(d) = &level.description { small { (d) } }
          }
        }
      }
    }
  }
}

#[derive(Deserialize)]
struct OnionData {
  core: String,
  layers: Vec<Level>,
}

/// Layers are listed inner to outer and drawn outer first.
pub(super) struct Onion;

impl Diagram for Onion {
  fn kind(&self) -> VisualizationType {
    VisualizationType::Onion
  }

  fn title_key(&self) -> &'static str {
    "diagram.onion"
  }

  fn icon(&self) -> &'static str {
    "🧅"
  }

  fn render(&self, input: &DiagramInput<'_>) -> Markup {
    let data = input.data_as::<OnionData>().unwrap_or_else(|| OnionData {
      core: input.name.chars().take(15).collect(),
      layers: input
        .steps()
        .iter()
        .take(4)
        .map(|s| Level { label: truncate_chars(s, 20), description: None })
        .collect(),
    });
    html! {
      div class="onion" {
        @for (i, layer) in data.layers.iter().enumerate().rev() {
          div class={ "onion-layer layer-" (i) } {
            span class="onion-label" { (layer.label) }
            @if let Some(d) = &layer.description { small { (d) } }
          }
        }
        div class="onion-core" { strong { (data.core) } }
      }
    }
  }
}
