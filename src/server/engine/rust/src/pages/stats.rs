/* src/server/engine/rust/src/pages/stats.rs */

use std::f64::consts::PI;

use insighthunt_core::{Category, ContentStats, Locale, localized_path};
use maud::{Markup, html};

use super::{Pages, section_heading};
use crate::head::HeadMeta;
use crate::layout::{PageContext, document};

const DONUT_RADIUS: f64 = 70.0;
const DONUT_STROKE: f64 = 36.0;

impl Pages {
  /// Dashboard: totals, category donut and bars, top contributors.
  pub fn stats(&self, locale: Locale) -> String {
    let path = localized_path("/stats", locale);
    let ctx = self.ctx(locale, &path);
    let stats = self.store().stats();
    let head = HeadMeta::new(ctx.title(ctx.t("stats.title")), ctx.t("home.subtitle"), &path);
    let totals = [
      ("🎙️", stats.total_episodes as usize, "stats.episodes"),
      ("👥", stats.total_guests, "stats.guests"),
      ("📚", stats.total_methodologies, "stats.methodologies"),
      ("🌐", stats.translated_methodologies, "stats.translated"),
    ];
    let body = html! {
      section class="page-header" {
        h1 { (ctx.t("stats.title")) }
      }
      section class="stats-banner" {
        @for (icon, value, key) in totals {
          div class="stat" {
            div class="stat-icon" { (icon) }
            div class="stat-value" { (value) }
            div class="stat-label" { (ctx.t(key)) }
          }
        }
      }
      div class="grid grid-2" {
        section class="chart" {
          (section_heading("🥧", ctx.t("home.category_distribution")))
          (donut(&ctx, &stats))
        }
        section class="chart" {
          (section_heading("📊", ctx.t("stats.by_category")))
          (bars(&ctx, &stats))
        }
      }
      section class="top-guests" {
        (section_heading("🏆", ctx.t("stats.top_guests")))
        ol {
          @for g in &stats.top_guests {
            li {
              a href=(ctx.href(&format!("/guests/{}", g.slug))) { (g.name) }
              span class="count" { (g.count) " " (ctx.t("common.count_suffix")) }
            }
          }
        }
      }
    };
    document(&ctx, &head, body).into_string()
  }
}

/// Categories by count, largest first, without empty ones.
fn ranked(stats: &ContentStats) -> Vec<(Category, usize)> {
  let mut rows: Vec<(Category, usize)> = stats.by_category.iter().copied().filter(|(_, n)| *n > 0).collect();
  rows.sort_by(|a, b| b.1.cmp(&a.1));
  rows
}

/// Ring of `stroke-dasharray` arcs, one per category.
fn donut(ctx: &PageContext<'_>, stats: &ContentStats) -> Markup {
  let rows = ranked(stats);
  let total: usize = rows.iter().map(|(_, n)| n).sum();
  let circumference = 2.0 * PI * DONUT_RADIUS;
  let mut offset = 0.0;
  let mut arcs = Vec::with_capacity(rows.len());
  for (category, count) in &rows {
    let len = circumference * *count as f64 / total.max(1) as f64;
    arcs.push((*category, *count, len, offset));
    offset += len;
  }
  html! {
    svg class="donut" viewBox="0 0 200 200" role="img" aria-label=(ctx.t("home.category_distribution")) {
      @for (category, count, len, offset) in &arcs {
        circle cx="100" cy="100" r=(DONUT_RADIUS) fill="none" stroke=(category.color())
          stroke-width=(DONUT_STROKE)
          stroke-dasharray=(format!("{len:.2} {:.2}", circumference - len))
          stroke-dashoffset=(format!("{:.2}", -offset))
          transform="rotate(-90 100 100)" {
          title { (category.label(ctx.locale)) ": " (count) }
        }
      }
      text x="100" y="106" text-anchor="middle" class="donut-total" { (total) }
    }
    ul class="legend" {
      @for (category, count) in &rows {
        li {
          span class="swatch" style={ "background:" (category.color()) } {}
          (category.emoji()) " " (category.label(ctx.locale))
          span class="count" { (count) " (" (format!("{:.1}", *count as f64 * 100.0 / total.max(1) as f64)) "%)" }
        }
      }
    }
  }
}

fn bars(ctx: &PageContext<'_>, stats: &ContentStats) -> Markup {
  let rows = ranked(stats);
  let max = rows.first().map(|(_, n)| *n).unwrap_or(1).max(1);
  html! {
    ul class="bars" {
      @for (category, count) in &rows {
        li class="bar-row" {
          span class="bar-label" { (category.label(ctx.locale)) }
          span class="bar" style={ "width:" (count * 100 / max) "%;background:" (category.color()) } {}
          span class="bar-value" { (count) }
        }
      }
    }
  }
}
