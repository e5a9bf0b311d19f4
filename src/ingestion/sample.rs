use crate::articles::types::{Article, CommentInfo};

use std::time::{SystemTime, UNIX_EPOCH};

pub const SAMPLE_LAST_COMMENT: &str = "这是一个很好的文章！";

// (title, content, category, author, view count)
const SAMPLES: &[(&str, &str, &str, &str, u32)] = &[
    (
        "Spring Boot 最佳实践",
        "Spring Boot 是一个流行的Java框架，本文将介绍其最佳实践和使用技巧...",
        "技术",
        "John Doe",
        1500,
    ),
    (
        "Elasticsearch 深入浅出",
        "Elasticsearch是一个强大的搜索引擎，本文将详细讲解其核心概念...",
        "技术",
        "Jane Smith",
        2000,
    ),
    (
        "Docker 容器化部署指南",
        "Docker让应用部署变得更简单，本文将介绍Docker的基本概念和实践...",
        "技术",
        "Mike Johnson",
        1800,
    ),
    (
        "UI设计趋势2024",
        "2024年的UI设计将更注重用户体验，本文将分析最新的设计趋势...",
        "设计",
        "Lisa Wang",
        1200,
    ),
    (
        "响应式设计实战",
        "如何打造完美的响应式网站？本文将分享实战经验和技巧...",
        "设计",
        "Tom Wilson",
        900,
    ),
    (
        "产品经理成长之路",
        "作为一名产品经理，需要具备哪些核心能力？本文将为你解答...",
        "产品",
        "Sarah Chen",
        2500,
    ),
    (
        "用户调研方法论",
        "好的产品离不开深入的用户调研，本文将介绍实用的调研方法...",
        "产品",
        "David Lee",
        1700,
    ),
];

/// The demo article set: fresh ids, created now, random comment counts below 100.
pub fn sample_articles() -> Vec<Article> {
    let create_time = now_ms();

    SAMPLES
        .iter()
        .map(|&(title, content, category, author, view_count)| Article {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            view_count,
            create_time,
            comment_info: CommentInfo {
                comment_count: rand::random::<u32>() % 100,
                last_comment: SAMPLE_LAST_COMMENT.to_string(),
            },
        })
        .collect()
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
