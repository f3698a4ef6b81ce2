// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将接口路径拼接到服务根地址之后
///
/// 与 `Url::join` 不同，根地址上的路径前缀会被保留：
/// `http://host/dev-api` + `/crawl/spider` => `http://host/dev-api/crawl/spider`
pub fn join_api_path(base_url: &str, path: &str) -> Result<Url, ParseError> {
    let base = Url::parse(base_url)?;
    let prefix = base.path().trim_end_matches('/');
    let path = path.trim_start_matches('/');

    let mut url = base.clone();
    url.set_path(&format!("{}/{}", prefix, path));
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
