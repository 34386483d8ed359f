/* src/server/engine/rust/src/ui.rs */

//! Interface strings for both page trees.

use insighthunt_core::{Locale, fallback_field};

/// `(key, en, zh)`. An empty `zh` falls back to English.
const STRINGS: &[(&str, &str, &str)] = &[
  // navigation
  ("nav.home", "Home", "首页"),
  ("nav.methodologies", "Methodologies", "方法论"),
  ("nav.guests", "Guests", "嘉宾"),
  ("nav.episodes", "Episodes", "播客"),
  ("nav.categories", "Categories", "分类"),
  ("nav.stats", "Stats", "数据"),
  ("nav.skills", "Skills", "技能包"),
  ("nav.switch_language", "Language", "语言"),
  // home
  ("home.title", "Hunt the Insights from the Best Product Minds", "从顶尖产品思想家那里猎取洞见"),
  ("home.hero", "Hunt the Insights", "洞见狩猎"),
  ("home.subtitle", "Product methodologies extracted from Lenny's Podcast", "从 Lenny's Podcast 中提炼的产品方法论"),
  ("home.search_placeholder", "Search methodologies, guests or topics...", "搜索方法论、嘉宾或话题..."),
  ("home.latest_episodes", "Latest Episodes", "最新播客"),
  ("home.featured", "Featured Methodologies", "精选方法论"),
  ("home.browse_categories", "Browse by Category", "按分类浏览"),
  ("home.category_distribution", "Category Distribution", "分类分布"),
  ("home.funnel", "Data at a Glance", "数据一览"),
  ("home.funnel_episodes", "Raw Episodes", "原始播客"),
  ("home.funnel_episodes_sub", "Lenny's Podcast Archive", "Lenny Podcast 档案"),
  ("home.funnel_methodologies_sub", "Extracted & Analyzed", "提取 & 分析"),
  ("home.funnel_skills_sub", "Actionable & Downloadable", "可操作 & 可下载"),
  ("home.funnel_note", "From raw podcasts to actionable skills", "从原始播客到可操作技能"),
  // stats
  ("stats.title", "Knowledge Base Stats", "知识库数据"),
  ("stats.episodes", "Episodes", "期播客"),
  ("stats.guests", "Guests", "嘉宾"),
  ("stats.methodologies", "Methodologies", "方法论"),
  ("stats.translated", "Translated", "已翻译"),
  ("stats.by_category", "Methodologies by Category", "各分类方法论数量"),
  ("stats.top_guests", "Top Contributors", "贡献最多的嘉宾"),
  // skills
  ("skills.title", "Skills", "技能包"),
  ("skills.hero", "Actionable Skills", "个可操作技能"),
  ("skills.subtitle", "Methodologies turned into downloadable skill packs with templates, frameworks and exercises.", "方法论转化为可下载的技能包，包含模板、框架和实战练习。"),
  ("skills.view_all", "View All on GitHub", "在 GitHub 查看全部"),
  ("skills.browse", "Browse on GitHub", "在 GitHub 浏览"),
  ("skills.count_suffix", "skills", "个技能"),
  ("skills.how", "How Skills Work", "技能包使用方式"),
  ("skills.learn", "Learn", "学习"),
  ("skills.learn_body", "Read the skill guide with core concepts", "阅读技能指南，掌握核心概念"),
  ("skills.practice", "Practice", "实践"),
  ("skills.practice_body", "Use the templates and frameworks provided", "使用提供的模板和框架"),
  ("skills.apply", "Apply", "应用"),
  ("skills.apply_body", "Apply them to your real projects", "应用到你的实际项目中"),
  ("skills.source", "Skills are extracted from our", "技能提炼自我们的"),
  ("skills.browse_methodologies", "Browse All Methodologies", "浏览全部方法论"),
  // listing
  ("list.title", "All Methodologies", "全部方法论"),
  ("list.search", "Search", "搜索"),
  ("list.all_categories", "All Categories", "全部分类"),
  ("list.all_guests", "All Guests", "全部嘉宾"),
  ("list.category", "Category", "分类"),
  ("list.guest", "Guest", "嘉宾"),
  ("list.results", "results", "条结果"),
  ("list.empty", "No methodologies match your search.", "没有找到匹配的方法论。"),
  ("list.clear", "Clear filters", "清除筛选"),
  // methodology detail
  ("methodology.summary", "Summary", "概述"),
  ("methodology.overview", "Overview", "框架概述"),
  ("methodology.principles", "Key Principles", "核心原则"),
  ("methodology.problem", "Problem It Solves", "解决的问题"),
  ("methodology.when_to_use", "When to Use", "适用场景"),
  ("methodology.mistakes", "Common Mistakes", "常见错误"),
  ("methodology.example", "Real World Example", "实际案例"),
  ("methodology.quote", "Key Quote", "金句"),
  ("methodology.guest", "From Guest", "来自嘉宾"),
  ("methodology.episode_context", "Episode Context", "播客背景"),
  ("methodology.keywords", "Keywords", "关键词"),
  ("methodology.back", "Back to All Methodologies", "返回全部方法论"),
  ("methodology.view_profile", "View Profile", "查看主页"),
  ("methodology.visualization", "Visualization", "可视化"),
  // guests and episodes
  ("guest.about", "About", "关于"),
  ("guest.background", "Background", "背景"),
  ("guest.methodologies", "Methodologies", "方法论"),
  ("guest.no_methodologies", "No methodologies extracted from this episode yet.", "这期播客还没有提取出方法论。"),
  ("guests.title", "Guests", "嘉宾"),
  ("episodes.title", "All Episodes", "全部播客"),
  ("episodes.subtitle", "Every episode comes with deep insights from product leaders.", "每期都包含来自产品领袖的深度洞见。"),
  ("episode.number", "Episode", "期数"),
  ("episode.summary", "Episode Summary", "本期概要"),
  ("episode.takeaways", "Key Takeaways", "核心要点"),
  ("episode.categories", "Topics", "涉及分类"),
  ("episode.transcript", "Full Transcript", "完整转录"),
  ("episode.listen", "Listen", "收听"),
  ("episode.words", "words", "词"),
  ("episode.chars", "characters", "字"),
  // categories
  ("categories.title", "Categories", "方法论分类"),
  ("categories.top", "Top methodologies", "热门方法论"),
  ("categories.of_total", "of all methodologies", "占全部方法论"),
  // diagrams
  ("diagram.step_flow", "Process Framework", "流程框架"),
  ("diagram.timeline", "Timeline", "时间线"),
  ("diagram.funnel", "Funnel Model", "漏斗模型"),
  ("diagram.cycle", "Cycle Model", "循环模型"),
  ("diagram.cycle_center", "Core", "核心"),
  ("diagram.matrix", "2x2 Matrix", "四象限矩阵"),
  ("diagram.quadrant", "Quadrant", "象限"),
  ("diagram.low", "Low", "低"),
  ("diagram.high", "High", "高"),
  ("diagram.dos_donts", "Do's and Don'ts", "该做与不该做"),
  ("diagram.do", "Do", "应该"),
  ("diagram.dont", "Don't", "避免"),
  ("diagram.spectrum", "Spectrum", "光谱"),
  ("diagram.before_after", "Before and After", "前后对比"),
  ("diagram.before", "Before", "之前"),
  ("diagram.after", "After", "之后"),
  ("diagram.mind_map", "Framework Structure", "框架结构"),
  ("diagram.tree", "Tree Structure", "树状结构"),
  ("diagram.pyramid", "Priority Pyramid", "优先级金字塔"),
  ("diagram.onion", "Layer Model", "层次模型"),
  ("diagram.equation", "Success Formula", "成功公式"),
  ("diagram.checklist", "Checklist", "检查清单"),
  ("diagram.scorecard", "Scorecard", "评分卡"),
  ("diagram.overall", "Overall", "总分"),
  ("diagram.case_study", "Case Study", "案例研究"),
  ("diagram.challenge", "Challenge", "挑战"),
  ("diagram.solution", "Solution", "方案"),
  ("diagram.result", "Result", "结果"),
  // common
  ("common.view_all", "View All", "查看全部"),
  ("common.learn_more", "Learn More", "了解更多"),
  ("common.back", "Back", "返回"),
  ("common.by", "by", "来自"),
  ("common.upvotes", "upvotes", "赞"),
  ("common.more", "more...", "更多..."),
  ("common.count_suffix", "methodologies", "个方法论"),
  ("common.footer", "Built with care for the PM community. Based on", "用 💜 为 PM 社区打造。基于"),
  ("not_found.title", "Page Not Found", "页面未找到"),
  ("not_found.body", "The page you are looking for does not exist or was moved.", "你要找的页面不存在或已被移动。"),
  ("not_found.home", "Back to Home", "返回首页"),
];

/// Interface string for `key`. Missing translations fall back to English;
/// unknown keys render as the key itself.
pub fn t(key: &str, locale: Locale) -> &str {
  match STRINGS.iter().find(|(k, _, _)| *k == key) {
    Some((_, en, zh)) => fallback_field(locale, *en, Some(*zh)),
    None => key,
  }
}
