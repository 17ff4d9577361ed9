// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scoutrs::config::settings::{IqiyiSettings, XhsSettings};
use serde_json::{json, Value};
use std::collections::HashMap;

pub const WEB_BASE: &str = "https://www.xiaohongshu.com";

/// 指向模拟服务器的小红书配置
pub fn xhs_settings(api_base_url: &str) -> XhsSettings {
    XhsSettings {
        api_base_url: api_base_url.to_string(),
        web_base_url: WEB_BASE.to_string(),
        cookie: "a1=test; web_session=abc".to_string(),
        user_agent: "scoutrs-test".to_string(),
        timeout_secs: Some(5),
    }
}

/// 指向模拟服务器的爱奇艺配置
pub fn iqiyi_settings(api_base_url: &str) -> IqiyiSettings {
    IqiyiSettings {
        api_base_url: api_base_url.to_string(),
        cookie: String::new(),
        headers: HashMap::new(),
        device_id: None,
        timeout_secs: 5,
    }
}

/// 两条笔记加一条推荐词的搜索响应
pub fn search_body() -> Value {
    json!({
        "code": 0,
        "success": true,
        "data": {
            "has_more": true,
            "items": [
                {
                    "id": "64f1a2b3c4d5e6f708192a3b",
                    "model_type": "note",
                    "xsec_token": "ABtok1=",
                    "note_card": {
                        "display_title": "周末露营清单",
                        "interact_info": { "liked_count": "1.2万" }
                    }
                },
                {
                    "id": "hot_query",
                    "model_type": "hot_query",
                    "hot_query": { "queries": [] }
                },
                {
                    "id": "650000000000000000000001",
                    "model_type": "note",
                    "xsec_token": "ABtok2",
                    "note_card": {
                        "display_title": "新手露营避坑",
                        "interact_info": { "liked_count": 87 }
                    }
                }
            ]
        }
    })
}

pub fn detail_body(nickname: &str, desc: &str) -> Value {
    json!({
        "code": 0,
        "data": {
            "items": [{
                "id": "ignored",
                "note_card": {
                    "user": { "nickname": nickname },
                    "time": 1700000000000i64,
                    "desc": desc,
                    "image_list": [
                        { "info_list": [
                            { "image_scene": "WB_PRV", "url": "https://img/1_prv.webp" },
                            { "image_scene": "WB_DFT", "url": "https://img/1_dft.webp" }
                        ]},
                        { "info_list": [
                            { "image_scene": "WB_PRV", "url": "https://img/2_prv.webp" }
                        ]}
                    ]
                }
            }]
        }
    })
}

pub fn comments_body() -> Value {
    json!({
        "code": 0,
        "data": {
            "cursor": "",
            "comments": [
                {
                    "user_info": { "nickname": "小王" },
                    "content": "收藏了",
                    "create_time": 1700000000000i64
                },
                {
                    "content": "没有作者的评论"
                }
            ]
        }
    })
}

/// 会话失效时上游返回的空结构
pub fn empty_body() -> Value {
    json!({ "code": -100, "success": false, "msg": "登录已过期", "data": {} })
}

/// 爱奇艺专辑搜索响应
pub fn album_body() -> Value {
    json!({
        "code": 0,
        "data": {
            "templates": [
                {
                    "template": 101,
                    "albumInfo": {
                        "title": "王牌对王牌第9季",
                        "videos": [
                            {
                                "title": "第1期",
                                "number": 1,
                                "qipuId": 9000000001i64,
                                "playUrl": "https://www.iqiyi.com/v_1.html",
                                "pageUrl": "https://www.iqiyi.com/v_1.html",
                                "subtitle": "沈腾贾玲重聚",
                                "duration": 5400,
                                "subscriptContent": "VIP",
                                "img": "https://pic/1.jpg",
                                "payMarkUrl": "https://pic/vip.png"
                            },
                            { "title": "第2期", "number": "2", "duration": "01:30:00" },
                            { "title": "第3期" },
                            { "title": "第4期" }
                        ]
                    }
                },
                {
                    "template": 102,
                    "albumInfo": { "videos": [{ "title": "别的专辑" }] }
                }
            ]
        }
    })
}
