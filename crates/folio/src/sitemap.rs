//! `sitemap.xml` for every registered route.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{FolioError, Result};
use crate::routes::RouteTable;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Absolute URLs in document order, each path once.
pub fn sitemap_urls(hostname: &str, routes: &RouteTable) -> Vec<String> {
    let hostname = hostname.trim_end_matches('/');
    let mut urls: Vec<String> = Vec::new();
    for route in routes.iter() {
        let url = format!("{hostname}{}", route.path);
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

pub fn sitemap_xml(hostname: &str, routes: &RouteTable) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_urlset(&mut xml, &sitemap_urls(hostname, routes)).map_err(|error| FolioError::Sitemap(error.to_string()))?;
    String::from_utf8(xml.into_inner()).map_err(|error| FolioError::Sitemap(error.to_string()))
}

fn write_urlset(xml: &mut Writer<Vec<u8>>, urls: &[String]) -> std::io::Result<()> {
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    xml.write_event(Event::Start(urlset))?;
    for url in urls {
        xml.write_event(Event::Start(BytesStart::new("url")))?;
        xml.write_event(Event::Start(BytesStart::new("loc")))?;
        xml.write_event(Event::Text(BytesText::new(url)))?;
        xml.write_event(Event::End(BytesEnd::new("loc")))?;
        xml.write_event(Event::End(BytesEnd::new("url")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(())
}
