/* src/server/engine/rust/src/pages/categories.rs */

use insighthunt_core::{Locale, localized_path};
use maud::html;

use super::Pages;
use crate::head::HeadMeta;
use crate::layout::document;

impl Pages {
  /// Category overview: share of the corpus and top three by upvotes,
  /// largest category first.
  pub fn categories(&self, locale: Locale) -> String {
    let path = localized_path("/categories", locale);
    let ctx = self.ctx(locale, &path);
    let rows = self.store().category_overview();
    let head = HeadMeta::new(ctx.title(ctx.t("categories.title")), ctx.t("home.subtitle"), &path);
    let body = html! {
      section class="page-header" {
        h1 { (ctx.t("categories.title")) }
      }
      div class="category-overview" {
        @for row in &rows {
          @let list_href = format!("{}?category={}", ctx.href("/methodologies"), row.category.slug());
          article class={ "category-row category-" (row.category.slug()) } {
            header {
              span class="category-emoji" { (row.category.emoji()) }
              h2 { a href=(list_href) { (row.category.label(locale)) } }
              span class="category-count" { (row.count) " " (ctx.t("common.count_suffix")) }
            }
            div class="share" {
              div class="share-bar" style={ "width:" (row.percentage) "%;background:" (row.category.color()) } {}
              span { (row.percentage) "% " (ctx.t("categories.of_total")) }
            }
            @if !row.top.is_empty() {
              h3 { (ctx.t("categories.top")) }
              ol class="category-top" {
                @for m in &row.top {
                  @let v = m.view(locale);
                  li {
                    a href=(ctx.href(&format!("/methodologies/{}", v.id))) { (v.name) }
                    span class="by" { " · " (v.guest_name) " · ▲ " (v.upvotes) }
                  }
                }
              }
            }
            a class="view-all" href=(list_href) { (ctx.t("common.view_all")) " →" }
          }
        }
      }
    };
    document(&ctx, &head, body).into_string()
  }
}
