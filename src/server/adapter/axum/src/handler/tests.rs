/* src/server/adapter/axum/src/handler/tests.rs */

use axum::Router;
use axum::body::Body;
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use insighthunt_core::{LocaleConfig, SiteServer, parse_content};
use tower::ServiceExt;

use super::build_router;

const CONTENT: &str = r#"[
  {
    "filename": "Shreyas Doshi",
    "guest": { "name": "Shreyas Doshi", "title": "Product Leader", "company": "Stripe" },
    "methodologies": [
      {
        "name": "LNO Framework",
        "name_zh": "LNO 框架",
        "category": "execution",
        "summary": "Classify tasks as Leverage, Neutral or Overhead.",
        "principles": ["List tasks", "Label each one"],
        "upvotes": 120
      },
      {
        "name": "Pre-mortem",
        "category": "product-strategy",
        "summary": "Imagine the launch failed.",
        "principles": ["Assume failure"],
        "upvotes": 80
      }
    ]
  }
]"#;

fn app() -> Router {
  let (store, _) = parse_content(CONTENT).unwrap();
  build_router(SiteServer::new(store).into_parts())
}

async fn send(req: Request<Body>) -> Response {
  app().oneshot(req).await.unwrap()
}

async fn get(uri: &str) -> Response {
  send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn body_text(res: Response) -> String {
  let bytes = res.into_body().collect().await.unwrap().to_bytes();
  String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(res: Response) -> serde_json::Value {
  serde_json::from_str(&body_text(res).await).unwrap()
}

fn header<'a>(res: &'a Response, name: axum::http::HeaderName) -> Option<&'a str> {
  res.headers().get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn default_visitor_stays_english() {
  let req = Request::get("/").header(ACCEPT_LANGUAGE, "en-US,en;q=0.9").header("x-vercel-ip-country", "US");
  let res = send(req.body(Body::empty()).unwrap()).await;
  assert_eq!(res.status(), StatusCode::OK);
  assert!(header(&res, SET_COOKIE).is_none());
  let html = body_text(res).await;
  assert!(html.contains("<html lang=\"en\">"));
}

#[tokio::test]
async fn geo_inference_redirects_with_marker_cookie() {
  let req = Request::get("/methodologies/m-1").header("x-vercel-ip-country", "tw");
  let res = send(req.body(Body::empty()).unwrap()).await;
  assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(header(&res, LOCATION), Some("/cn/methodologies/m-1"));
  let cookie = header(&res, SET_COOKIE).unwrap();
  assert!(cookie.starts_with("auto-detected-language=zh;"));
  assert!(cookie.contains("Max-Age=604800"));
}

#[tokio::test]
async fn header_inference_redirects_root_and_keeps_query() {
  let req = Request::get("/?ref=home").header(ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9");
  let res = send(req.body(Body::empty()).unwrap()).await;
  assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(header(&res, LOCATION), Some("/cn?ref=home"));
}

#[tokio::test]
async fn explicit_cookie_beats_inference() {
  let req = Request::get("/stats")
    .header(COOKIE, "theme=dark; language-preference=en")
    .header("x-vercel-ip-country", "CN");
  let res = send(req.body(Body::empty()).unwrap()).await;
  assert_eq!(res.status(), StatusCode::OK);
  assert!(header(&res, SET_COOKIE).is_none());
}

#[tokio::test]
async fn preference_in_a_later_cookie_header_is_honoured() {
  let req = Request::get("/stats")
    .header(COOKIE, "theme=dark")
    .header(COOKIE, "language-preference=en")
    .header("x-vercel-ip-country", "CN");
  let res = send(req.body(Body::empty()).unwrap()).await;
  assert_eq!(res.status(), StatusCode::OK);
  assert!(header(&res, SET_COOKIE).is_none());
}

#[tokio::test]
async fn unrecognized_cookie_counts_as_absent() {
  let req = Request::get("/stats")
    .header(COOKIE, "language-preference=fr")
    .header("x-vercel-ip-country", "CN");
  let res = send(req.body(Body::empty()).unwrap()).await;
  assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn excluded_paths_are_never_redirected() {
  for uri in ["/cn/stats", "/api/stats", "/_next/static/site.css", "/favicon.ico", "/robots.txt"] {
    let req = Request::get(uri).header(ACCEPT_LANGUAGE, "zh").header("x-vercel-ip-country", "CN");
    let res = send(req.body(Body::empty()).unwrap()).await;
    assert_ne!(res.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
    assert!(header(&res, SET_COOKIE).is_none(), "{uri}");
  }
}

#[tokio::test]
async fn cn_path_renders_chinese_even_with_english_cookie() {
  let req = Request::get("/cn/methodologies/m-1").header(COOKIE, "language-preference=en");
  let res = send(req.body(Body::empty()).unwrap()).await;
  assert_eq!(res.status(), StatusCode::OK);
  let html = body_text(res).await;
  assert!(html.contains("<html lang=\"zh-CN\">"));
  assert!(html.contains("LNO 框架"));
}

#[tokio::test]
async fn unknown_ids_render_localized_404() {
  let res = get("/cn/methodologies/m-404").await;
  assert_eq!(res.status(), StatusCode::NOT_FOUND);
  assert!(body_text(res).await.contains("页面未找到"));
  let res = get("/nowhere").await;
  assert_eq!(res.status(), StatusCode::NOT_FOUND);
  assert!(body_text(res).await.contains("Page Not Found"));
}

#[tokio::test]
async fn list_page_applies_query() {
  let res = get("/methodologies?q=pre-mortem").await;
  assert_eq!(res.status(), StatusCode::OK);
  let html = body_text(res).await;
  assert!(html.contains("Imagine the launch failed."));
  assert!(!html.contains("Classify tasks"));
}

#[tokio::test]
async fn language_switch_sets_preference_and_mirrors_target() {
  let res = get("/api/language?lang=zh&to=%2Fmethodologies%3Fq%3Dlno").await;
  assert_eq!(res.status(), StatusCode::SEE_OTHER);
  assert_eq!(header(&res, LOCATION), Some("/cn/methodologies?q=lno"));
  let cookie = header(&res, SET_COOKIE).unwrap();
  assert!(cookie.starts_with("language-preference=zh;"));
  assert!(cookie.contains("Max-Age=31536000"));

  let res = get("/api/language?lang=en&to=%2Fcn%2Fstats").await;
  assert_eq!(header(&res, LOCATION), Some("/stats"));
}

#[tokio::test]
async fn language_switch_refuses_offsite_targets() {
  let res = get("/api/language?lang=en&to=%2F%2Fevil.example").await;
  assert_eq!(header(&res, LOCATION), Some("/"));
}

#[tokio::test]
async fn language_switch_rejects_unknown_language() {
  let res = get("/api/language?lang=fr").await;
  assert_eq!(res.status(), StatusCode::BAD_REQUEST);
  let json = body_json(res).await;
  assert_eq!(json["ok"], false);
  assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn api_lists_resolved_views() {
  let json = body_json(get("/api/methodologies?lang=zh&category=execution").await).await;
  assert_eq!(json["ok"], true);
  assert_eq!(json["data"]["total"], 1);
  assert_eq!(json["data"]["methodologies"][0]["name"], "LNO 框架");
  assert_eq!(json["data"]["methodologies"][0]["summary"], "Classify tasks as Leverage, Neutral or Overhead.");
}

#[tokio::test]
async fn api_unknown_lang_is_english() {
  let json = body_json(get("/api/methodologies/m-1?lang=xx").await).await;
  assert_eq!(json["data"]["name"], "LNO Framework");
  assert_eq!(json["data"]["locale"], "en");
}

#[tokio::test]
async fn api_missing_methodology_is_json_404() {
  let res = get("/api/methodologies/m-9").await;
  assert_eq!(res.status(), StatusCode::NOT_FOUND);
  let json = body_json(res).await;
  assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn api_stats_counts_categories() {
  let json = body_json(get("/api/stats").await).await;
  assert_eq!(json["data"]["totalMethodologies"], 2);
  assert_eq!(json["data"]["categories"]["execution"], 1);
  assert_eq!(json["data"]["categories"]["team-culture"], 0);
}

#[tokio::test]
async fn skills_page_is_mounted_in_both_trees() {
  let res = get("/skills").await;
  assert_eq!(res.status(), StatusCode::OK);
  assert!(body_text(res).await.contains("Actionable Skills"));
  let res = get("/cn/skills").await;
  assert_eq!(res.status(), StatusCode::OK);
  assert!(body_text(res).await.contains("个可操作技能"));
}

#[tokio::test]
async fn sitemap_and_robots() {
  let res = get("/sitemap.xml").await;
  assert_eq!(header(&res, CONTENT_TYPE), Some("application/xml; charset=utf-8"));
  let xml = body_text(res).await;
  assert!(xml.contains("<loc>https://insighthunt.org/cn/methodologies/m-2</loc>"));
  assert!(xml.contains("<loc>https://insighthunt.org/cn/skills</loc>"));
  let robots = body_text(get("/robots.txt").await).await;
  assert!(robots.contains("Sitemap: https://insighthunt.org/sitemap.xml"));
}

#[tokio::test]
async fn static_assets_are_served_from_configured_dir() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("site.css"), "body{}").unwrap();
  let (store, _) = parse_content(CONTENT).unwrap();
  let router = build_router(SiteServer::new(store).static_dir(dir.path()).into_parts());
  let res = router.oneshot(Request::get("/_next/static/site.css").body(Body::empty()).unwrap()).await.unwrap();
  assert_eq!(res.status(), StatusCode::OK);
  assert_eq!(body_text(res).await, "body{}");
}

#[tokio::test]
async fn custom_prefixes_drive_rendered_links_and_exclusions() {
  let (store, _) = parse_content(CONTENT).unwrap();
  let config = LocaleConfig {
    api_prefix: "/v1".to_string(),
    asset_prefix: "/assets".to_string(),
    ..LocaleConfig::default()
  };
  let router = build_router(SiteServer::new(store).locale_config(config).into_parts());

  let res = router.clone().oneshot(Request::get("/cn/stats").body(Body::empty()).unwrap()).await.unwrap();
  let html = body_text(res).await;
  assert!(html.contains(r#"href="/assets/static/site.css""#));
  assert!(html.contains("/v1/language?lang=en&amp;to=%2Fstats"));
  assert!(!html.contains("/api/language"));

  let req = Request::get("/v1/language?lang=zh&to=%2Fstats").header("x-vercel-ip-country", "CN");
  let res = router.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
  assert_eq!(res.status(), StatusCode::SEE_OTHER);
  assert_eq!(header(&res, LOCATION), Some("/cn/stats"));
}
