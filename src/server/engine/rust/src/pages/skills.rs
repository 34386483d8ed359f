/* src/server/engine/rust/src/pages/skills.rs */

use insighthunt_core::{Locale, localized_path};
use maud::{Markup, html};

use super::{Pages, section_heading};
use crate::head::HeadMeta;
use crate::layout::{PageContext, document};

pub const SKILLS_REPO: &str = "https://github.com/Coowoolf/insighthunt-skills/tree/main";

/// One downloadable skill pack in the companion repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillPack {
  /// Directory under [`SKILLS_REPO`].
  pub slug: &'static str,
  pub label: &'static str,
  pub label_zh: &'static str,
  pub count: usize,
  pub emoji: &'static str,
}

impl SkillPack {
  pub fn label(&self, locale: Locale) -> &'static str {
    match locale {
      Locale::En => self.label,
      Locale::Zh => self.label_zh,
    }
  }

  pub fn url(&self) -> String {
    format!("{SKILLS_REPO}/{}", self.slug)
  }
}

const fn pack(
  slug: &'static str,
  label: &'static str,
  label_zh: &'static str,
  count: usize,
  emoji: &'static str,
) -> SkillPack {
  SkillPack { slug, label, label_zh, count, emoji }
}

pub const SKILL_PACKS: [SkillPack; 8] = [
  pack("product-growth", "Product Growth", "产品增长", 16, "📈"),
  pack("team-leadership", "Team Leadership", "团队领导", 17, "👥"),
  pack("decision-thinking", "Decision & Thinking", "决策与思维", 10, "🧠"),
  pack("strategy-planning", "Strategy Planning", "战略规划", 10, "🎯"),
  pack("career-development", "Career Development", "职业发展", 7, "🚀"),
  pack("user-research", "User Research", "用户研究", 6, "🔍"),
  pack("ai-engineering", "AI Engineering", "AI 工程", 4, "🤖"),
  pack("organization-ops", "Organization & Ops", "组织运营", 4, "⚙️"),
];

pub fn total_skills() -> usize {
  SKILL_PACKS.iter().map(|p| p.count).sum()
}

impl Pages {
  /// Skill-pack catalogue. Packs live on GitHub; this page only links out.
  pub fn skills(&self, locale: Locale) -> String {
    let path = localized_path("/skills", locale);
    let ctx = self.ctx(locale, &path);
    let total = total_skills();
    let head = HeadMeta::new(ctx.title(ctx.t("skills.title")), ctx.t("skills.subtitle"), &path);
    let steps = [
      ("📖", "skills.learn", "skills.learn_body"),
      ("🛠️", "skills.practice", "skills.practice_body"),
      ("🎯", "skills.apply", "skills.apply_body"),
    ];
    let body = html! {
      section class="hero skills-hero" {
        div class="hero-icon" { "🎓" }
        h1 class="gradient-text" { (total) " " (ctx.t("skills.hero")) }
        p class="hero-subtitle" { (ctx.t("skills.subtitle")) }
        a class="button" href=(SKILLS_REPO) target="_blank" rel="noopener noreferrer" {
          "📦 " (ctx.t("skills.view_all")) " →"
        }
      }
      section class="grid grid-4 skill-packs" {
        @for p in &SKILL_PACKS { (pack_card(&ctx, p)) }
      }
      section class="how-skills-work" {
        (section_heading("💡", ctx.t("skills.how")))
        div class="grid grid-3" {
          @for (icon, title, text) in steps {
            div class="step" {
              div class="step-icon" { (icon) }
              h3 { (ctx.t(title)) }
              p { (ctx.t(text)) }
            }
          }
        }
      }
      section class="cta" {
        p { (ctx.t("skills.source")) " " (self.store().methodologies().len()) " " (ctx.t("common.count_suffix")) }
        a href=(ctx.href("/methodologies")) { "📚 " (ctx.t("skills.browse_methodologies")) " →" }
      }
    };
    document(&ctx, &head, body).into_string()
  }
}

fn pack_card(ctx: &PageContext<'_>, p: &SkillPack) -> Markup {
  html! {
    a class="skill-pack" href=(p.url()) target="_blank" rel="noopener noreferrer" {
      div class="skill-emoji" { (p.emoji) }
      h3 { (p.label(ctx.locale)) }
      p class="count" { (p.count) " " (ctx.t("skills.count_suffix")) }
      span class="skill-link" { "📥 " (ctx.t("skills.browse")) }
    }
  }
}
