use serde::Deserialize;
use std::fmt;

/// How a source encodes its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Newline-delimited configs, used as-is.
    Raw,
    /// A base64 blob that decodes to newline-delimited configs.
    Base64,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Raw => write!(f, "raw"),
            Encoding::Base64 => write!(f, "base64"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Source {
    pub url: String,
    #[serde(default = "default_encoding")]
    pub encoding: Encoding,
}

fn default_encoding() -> Encoding {
    Encoding::Raw
}

impl Source {
    pub fn raw(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            encoding: Encoding::Raw,
        }
    }

    pub fn base64(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            encoding: Encoding::Base64,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.url, self.encoding)
    }
}

/// Public subscription lists queried when no config file overrides them.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::raw("https://raw.githubusercontent.com/mahdibland/ShadowsocksAggregator/master/sub/sub_merge.txt"),
        Source::raw("https://raw.githubusercontent.com/awesome-vpn/awesome-vpn/master/all"),
        Source::base64("https://raw.githubusercontent.com/freefq/free/master/v2"),
        Source::base64("https://raw.githubusercontent.com/Pawdroid/Free-servers/main/sub"),
        Source::base64("https://raw.githubusercontent.com/aiboboxx/v2rayfree/main/v2"),
        Source::base64("https://raw.githubusercontent.com/AzadNetCH/Clash/main/V2Ray.txt"),
        Source::base64("https://raw.githubusercontent.com/vpei/Free-Node-Merge/main/o/node.txt"),
        Source::base64("https://raw.githubusercontent.com/tbbatbb/Proxy/master/dist/v2ray.config.txt"),
        Source::base64("https://raw.fastgit.org/ripaojiedian/freenode/main/sub"),
        Source::base64("https://github.xiaoku666.tk/https://raw.githubusercontent.com/ripaojiedian/freenode/main/sub"),
        Source::base64("https://raw.githubusercontent.com/learnhard-cn/free_proxy_ss/main/v2ray/v2raysub"),
    ]
}
