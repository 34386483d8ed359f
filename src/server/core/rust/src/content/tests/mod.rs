/* src/server/core/rust/src/content/tests/mod.rs */

mod loader;
mod query;
mod transcript;

use super::{ContentStore, parse_content};

pub(super) const FIXTURE: &str = r#"[
  {
    "filename": "Shreyas Doshi",
    "guest": {
      "name": "Shreyas Doshi",
      "title": "Product Leader",
      "title_zh": "产品负责人",
      "company": "Stripe",
      "background": "Former PM lead at Stripe and Twitter."
    },
    "episodeSummary": "On product sense and pre-mortems.",
    "episodeSummary_zh": "关于产品感和事前验尸。",
    "keyTakeaways": ["Run pre-mortems", "Separate impact from output"],
    "methodologies": [
      {
        "name": "LNO Framework",
        "name_zh": "LNO 框架",
        "category": "execution",
        "summary": "Classify tasks as Leverage, Neutral or Overhead.",
        "summary_zh": "把任务分成杠杆、中性和开销三类。",
        "principles": ["Step 1: List tasks", "Step 2: Label each one"],
        "principles_zh": ["第一步：列出任务", "第二步：逐一标注"],
        "quote": "Not all tasks are equal.",
        "quote_zh": "",
        "upvotes": 120,
        "visualizationType": "Matrix2x2"
      },
      {
        "name": "Pre-mortem Planning",
        "category": "product-strategy",
        "summary": "Imagine the launch failed and work backwards.",
        "principles": ["Assume failure", "List causes"],
        "whenToUse_zh": "发布之前",
        "upvotes": 80
      }
    ]
  },
  {
    "filename": "Lenny Rachitsky",
    "guest": { "name": "Lenny Rachitsky", "title": "Host", "company": "Lenny's Newsletter" },
    "episodeNumber": 7,
    "keyTakeaways": [],
    "methodologies": [
      {
        "name": "Growth Loops",
        "category": "growth-metrics",
        "summary": "Compounding loops beat funnels.",
        "principles": ["Find the loop"],
        "upvotes": 200,
        "visualizationType": "Sankey"
      },
      {
        "name": "",
        "summary": "Nameless record"
      },
      {
        "name": "Wellness Rituals",
        "category": "wellness",
        "summary": "Unknown category lands in strategy.",
        "upvotes": 5
      }
    ]
  },
  {
    "filename": "Anonymous",
    "guest": { "title": "Mystery" },
    "methodologies": []
  }
]"#;

pub(super) fn fixture_store() -> ContentStore {
  parse_content(FIXTURE).unwrap().0
}
