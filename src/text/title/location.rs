use tracing::debug;

pub const DIRECT_MUNICIPALITIES: [&str; 4] = ["北京市", "上海市", "天津市", "重庆市"];

/// Longest first.
const DEVELOPMENT_ZONE_SUFFIXES: [&str; 5] =
    ["高新技术产业开发区", "经济技术开发区", "开发区", "高新区", "科技园"];

const NON_PLACE_ENDINGS: [&str; 20] = [
    "园区", "合作区", "示范区", "集聚区", "社区", "景区", "功能区", "片区", "专区", "试验区",
    "先行区", "自贸区", "地区", "辖区", "市区", "城区", "小镇", "城镇", "乡镇", "农区",
];

const NON_PLACE_LEADERS: [char; 6] = ['全', '本', '我', '各', '该', '辖'];

const NAME_LEADERS: [&str; 15] = [
    "关于", "开展", "组织", "做好", "申报", "征集", "受理", "印发", "转发", "公布", "推荐",
    "认定", "年度", "年", "的",
];

const FORWARD_WINDOW: usize = 6;

type LocationRule = (&'static str, fn(&str) -> Option<String>);

const LOCATION_RULES: [LocationRule; 8] = [
    ("municipality_district", municipality_with_district),
    ("city_district", city_with_district),
    ("district_or_town", district_or_town),
    ("county", county),
    ("development_zone", development_zone),
    ("municipality", municipality),
    ("city", city),
    ("province", province),
];

pub fn extract_raw_location(text: &str) -> Option<String> {
    for (name, rule) in LOCATION_RULES {
        if let Some(location) = rule(text) {
            debug!(rule = name, location = %location, "location rule matched");
            return Some(location);
        }
    }
    None
}

pub fn format_location(raw_location: Option<&str>) -> String {
    let Some(location) = raw_location else {
        return "市级".to_string();
    };

    for city in DIRECT_MUNICIPALITIES {
        if let Some(district) = location.strip_prefix(city) {
            if !district.is_empty() && ends_with_any(location, &["区", "县", "镇"]) {
                return district.to_string();
            }
        }
    }

    if ends_with_any(location, &["区", "镇", "县"])
        || DEVELOPMENT_ZONE_SUFFIXES
            .iter()
            .any(|suffix| location.contains(*suffix))
    {
        return location.to_string();
    }
    if DIRECT_MUNICIPALITIES.contains(&location) {
        return location.to_string();
    }
    if location.ends_with('市') {
        return "市级".to_string();
    }
    if location.ends_with('省') {
        return "省级".to_string();
    }
    String::new()
}

pub fn short_location_name(location: &str) -> &str {
    for suffix in ['市', '省', '区', '县', '镇'] {
        if let Some(short) = location.strip_suffix(suffix) {
            if !short.is_empty() {
                return short;
            }
        }
    }
    location
}

pub fn is_plausible_place(candidate: &str) -> bool {
    !candidate.contains('级')
        && !ends_with_any(candidate, &NON_PLACE_ENDINGS)
        && !candidate
            .chars()
            .next()
            .is_some_and(|ch| NON_PLACE_LEADERS.contains(&ch))
}

fn municipality_with_district(text: &str) -> Option<String> {
    for city in DIRECT_MUNICIPALITIES {
        for (offset, _) in text.match_indices(city) {
            let after = &text[offset + city.len()..];
            if let Some(district) = district_ahead(after) {
                return Some(format!("{city}{district}"));
            }
        }
    }
    None
}

fn city_with_district(text: &str) -> Option<String> {
    for (offset, _) in text.match_indices('市') {
        let city_name = name_before(text, offset);
        if !(1..=5).contains(&city_name.chars().count()) {
            continue;
        }
        if let Some(district) = district_ahead(&text[offset + '市'.len_utf8()..]) {
            return Some(district.to_string());
        }
    }
    None
}

fn district_or_town(text: &str) -> Option<String> {
    suffixed_place(text, &['区', '镇'], 2, 5)
}

fn county(text: &str) -> Option<String> {
    suffixed_place(text, &['县'], 1, 5)
}

fn development_zone(text: &str) -> Option<String> {
    for (offset, _) in text.char_indices() {
        let rest = &text[offset..];
        let Some(suffix) = DEVELOPMENT_ZONE_SUFFIXES
            .iter()
            .find(|suffix| rest.starts_with(**suffix))
        else {
            continue;
        };
        let name = name_before(text, offset);
        if (1..=8).contains(&name.chars().count()) {
            let candidate = format!("{name}{suffix}");
            if is_plausible_place(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

fn municipality(text: &str) -> Option<String> {
    DIRECT_MUNICIPALITIES
        .iter()
        .find(|city| text.contains(**city))
        .map(|city| city.to_string())
}

fn city(text: &str) -> Option<String> {
    suffixed_place(text, &['市'], 2, 5)
}

fn province(text: &str) -> Option<String> {
    suffixed_place(text, &['省'], 2, 7)
}

fn suffixed_place(
    text: &str,
    suffixes: &[char],
    min_name: usize,
    max_name: usize,
) -> Option<String> {
    for (offset, ch) in text.char_indices() {
        if !suffixes.contains(&ch) {
            continue;
        }
        if text[offset + ch.len_utf8()..].starts_with('级') {
            continue;
        }
        let name = name_before(text, offset);
        if !(min_name..=max_name).contains(&name.chars().count()) {
            continue;
        }
        let candidate = format!("{name}{ch}");
        if is_plausible_place(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn district_ahead(text: &str) -> Option<&str> {
    let run_end = han_run_end(text);
    for (offset, ch) in text[..run_end].char_indices().take(FORWARD_WINDOW) {
        let min_name = match ch {
            '区' | '镇' => 2,
            '县' => 1,
            _ => continue,
        };
        let end = offset + ch.len_utf8();
        let candidate = &text[..end];
        if text[..offset].chars().count() >= min_name && is_plausible_place(candidate) {
            return Some(candidate);
        }
        return None;
    }
    None
}

fn name_before(text: &str, end: usize) -> &str {
    let head = &text[..end];
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, ch)| is_han(*ch))
        .last()
        .map(|(index, _)| index)
        .unwrap_or(end);
    let run = &head[start..];

    let cut = NAME_LEADERS
        .iter()
        .filter_map(|leader| run.rfind(*leader).map(|position| position + leader.len()))
        .max()
        .unwrap_or(0);
    &run[cut..]
}

fn han_run_end(text: &str) -> usize {
    text.char_indices()
        .find(|(_, ch)| !is_han(*ch))
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}

pub fn is_han(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FFF}')
}

fn ends_with_any(text: &str, endings: &[&str]) -> bool {
    endings.iter().any(|ending| text.ends_with(*ending))
}
