use crate::domain::model::Recommendation;

pub const HEADING: &str = "Recommended Crops:";

/// 產生結果區塊的 HTML，值原樣插入
pub fn render_html(recommendations: &[Recommendation]) -> String {
    let mut html = format!("<h3>{}</h3>", HEADING);
    for rec in recommendations {
        html.push_str(&format!("<p>{}</p>", line_for(rec)));
    }
    html
}

/// 終端機輸出用：標題加上每筆一行
pub fn render_text(recommendations: &[Recommendation]) -> Vec<String> {
    std::iter::once(HEADING.to_string())
        .chain(recommendations.iter().map(line_for))
        .collect()
}

fn line_for(rec: &Recommendation) -> String {
    format!("{}: {}", rec.crop, rec.suitability)
}
