use super::*;
use super::marker::MarkerKind;
use super::renumber::TrailingPunctuation;
use super::whitespace::{collapse_internal_whitespace, remove_all_internal_whitespace};

fn engine() -> TextEngine {
    TextEngine::new().expect("engine should compile")
}

fn rendered(outcome: PipelineOutcome) -> String {
    match outcome {
        PipelineOutcome::Rendered(text) => text,
        PipelineOutcome::EmptyInput => panic!("expected rendered output"),
    }
}

#[test]
fn remove_all_internal_whitespace_is_idempotent() {
    for input in [" a\u{200B} b\t\u{3000}c \n", "", "已经紧凑", "\u{FEFF}申报 通知\r\n"] {
        let once = remove_all_internal_whitespace(input);
        assert_eq!(remove_all_internal_whitespace(&once), once);
    }
    assert_eq!(remove_all_internal_whitespace(" a\u{200B} b\t\u{3000}c \n"), "abc");
}

#[test]
fn collapse_internal_whitespace_splits_on_zero_width_characters() {
    assert_eq!(
        collapse_internal_whitespace("  公开  征集\u{200B}项目 "),
        "公开 征集 项目"
    );
    assert!(is_blank(" \u{200B}\t\n"));
    assert!(!is_blank(" 。"));
}

#[test]
fn level1_numbers_every_line_in_order() {
    let engine = engine();
    let output = rendered(engine.run(
        Pipeline::Renumber(NumberingScheme::Level1Flat),
        "加强组织领导\n\n落实资金保障\n强化监督检查",
    ));

    assert_eq!(
        output,
        "（1）加强组织领导。\n（2）落实资金保障。\n（3）强化监督检查。"
    );
}

#[test]
fn level1_replaces_existing_markers_and_terminal_punctuation() {
    let engine = engine();
    let output = rendered(engine.run(
        Pipeline::Renumber(NumberingScheme::Level1Flat),
        "1. 加强组织领导;\n2、落实资金保障\n（三）强化监督检查。",
    ));

    assert_eq!(
        output,
        "（1）加强组织领导。\n（2）落实资金保障。\n（3）强化监督检查。"
    );
}

#[test]
fn level1_keeps_leading_colon_line_as_heading() {
    let engine = engine();
    let text = "申报条件如下：\n企业注册地在本市\n研发投入占比不低于3%";
    let output = rendered(engine.run(Pipeline::Renumber(NumberingScheme::Level1Flat), text));

    assert_eq!(
        output,
        "申报条件如下：\n（1）企业注册地在本市。\n（2）研发投入占比不低于3%。"
    );

    let items = numbered_items(text, NumberingScheme::Level1Flat, &engine.markers);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].sequence_index, 1);
    assert_eq!(items[1].trailing_punctuation, TrailingPunctuation::Period);
}

#[test]
fn heading_applies_only_to_the_first_line() {
    let engine = engine();
    let output = rendered(engine.run(
        Pipeline::Renumber(NumberingScheme::Level1Flat),
        "申报条件如下：\n企业注册地在本市\n材料清单：\n营业执照",
    ));

    assert_eq!(
        output,
        "申报条件如下：\n（1）企业注册地在本市。\n（2）材料清单：\n（3）营业执照。"
    );
}

#[test]
fn level2_keeps_unmarked_heading_and_numbers_marked_one() {
    let engine = engine();
    assert_eq!(
        rendered(engine.run(
            Pipeline::Renumber(NumberingScheme::Level2Flat),
            "申报条件如下：\n企业注册地在本市\n依法经营",
        )),
        "申报条件如下：\n①企业注册地在本市。\n②依法经营。"
    );
    assert_eq!(
        rendered(engine.run(
            Pipeline::Renumber(NumberingScheme::Level2Flat),
            "一、申报条件：\n依法经营",
        )),
        "①申报条件：\n②依法经营。"
    );
}

#[test]
fn punctuated_letter_markers_are_replaced() {
    let engine = engine();
    assert_eq!(
        rendered(engine.run(
            Pipeline::Renumber(NumberingScheme::Level1Flat),
            "a.Apple\nb.Banana",
        )),
        "（1）Apple。\n（2）Banana。"
    );
}

#[test]
fn level2_falls_back_to_brackets_past_twenty() {
    let engine = engine();
    let text = (1..=21)
        .map(|index| format!("事项{index}"))
        .collect::<Vec<_>>()
        .join("\n");

    let items = numbered_items(&text, NumberingScheme::Level2Flat, &engine.markers);
    assert_eq!(items.len(), 21);
    assert_eq!(items[0].rendered_marker, "①");
    assert_eq!(items[19].rendered_marker, "⑳");
    assert_eq!(items[20].rendered_marker, "[21]");

    let output = rendered(engine.run(Pipeline::Renumber(NumberingScheme::Level2Flat), &text));
    assert_eq!(output.lines().last(), Some("[21]事项21。"));
}

#[test]
fn two_level_restarts_sub_items_under_each_item() {
    let engine = engine();
    let output = rendered(engine.run(
        Pipeline::Renumber(NumberingScheme::TwoLevelNested),
        "（1）Alpha\n①Beta\n②Gamma\n（2）Delta\n①Epsilon",
    ));

    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec!["（1）Alpha。", "①Beta。", "②Gamma。", "（2）Delta。", "①Epsilon。"]
    );
}

#[test]
fn two_level_promotes_colon_and_unmarked_lines() {
    let engine = engine();
    let output = rendered(engine.run(
        Pipeline::Renumber(NumberingScheme::TwoLevelNested),
        "申报条件：\n①注册地在本市\n②依法经营\n提交材料",
    ));

    assert_eq!(
        output,
        "（1）申报条件：\n①注册地在本市。\n②依法经营。\n（2）提交材料。"
    );
}

#[test]
fn circled_numeral_covers_one_through_twenty() {
    assert_eq!(marker::circled_numeral(1), "①");
    assert_eq!(marker::circled_numeral(20), "⑳");
    assert_eq!(marker::circled_numeral(21), "[21]");
    assert_eq!(marker::circled_numeral(0), "[0]");
}

#[test]
fn marker_rules_classify_leading_tokens() {
    let markers = MarkerRecognizer::new().expect("marker regexes");
    let cases = [
        ("2025年度工作安排", MarkerKind::Year, "2025年度"),
        ("3）内容", MarkerKind::NumericParen, "3）"),
        ("1.内容", MarkerKind::NumericDot, "1."),
        ("12 内容", MarkerKind::NumericDot, "12"),
        ("一、总体要求", MarkerKind::CjkNumeralComma, "一、"),
        ("（十二）、内容", MarkerKind::Parenthesized, "（十二）、"),
        ("②内容", MarkerKind::Circled, "②"),
        ("a. item", MarkerKind::LetterDot, "a."),
        ("a.Apple", MarkerKind::LetterDot, "a."),
        ("B）说明", MarkerKind::LetterDot, "B）"),
        ("第3条 适用范围", MarkerKind::Article, "第3条"),
    ];

    for (line, kind, label) in cases {
        let marker = markers.match_leading_marker(line);
        assert_eq!(marker.kind, kind, "line: {line}");
        assert_eq!(marker.label, label, "line: {line}");
    }
}

#[test]
fn marker_guards_reject_quantities_and_words() {
    let markers = MarkerRecognizer::new().expect("marker regexes");
    for line in ["3.5亿元", "25年以上", "9:30开始", "Alpha", "A轮融资", "第2批次"] {
        assert_eq!(
            markers.match_leading_marker(line).kind,
            MarkerKind::None,
            "line: {line}"
        );
    }
}

#[test]
fn strip_leading_marker_keeps_years() {
    let markers = MarkerRecognizer::new().expect("marker regexes");
    assert_eq!(markers.strip_leading_marker(" (2) 强化 保障"), "强化保障");
    assert_eq!(markers.strip_leading_marker("2025年 目标"), "2025年目标");
    assert!(markers.starts_with_year("2025年目标"));
    assert!(!markers.starts_with_ordinal("2025年目标"));
}

#[test]
fn punctuation_converter_leaves_links_untouched() {
    let converter = PunctuationConverter::new().expect("punctuation regex");
    let url = "https://kjj.hefei.gov.cn/list?id=3";
    let output = converter.latin_to_cjk(&format!("详见 {url} (官网), 截止时间9:30!"));

    assert!(output.contains(url));
    assert_eq!(output, format!("详见 {url} （官网）， 截止时间9:30！"));
}

#[test]
fn punctuation_after_a_link_is_converted() {
    let converter = PunctuationConverter::new().expect("punctuation regex");
    assert_eq!(
        converter.latin_to_cjk("请访问(https://kjj.gov.cn),谢谢"),
        "请访问（https://kjj.gov.cn），谢谢"
    );
    assert_eq!(
        converter.latin_to_cjk("见www.hefei.gov.cn/a!"),
        "见www.hefei.gov.cn/a！"
    );
    assert_eq!(
        converter.exempt_spans("链接:https://kjj.gov.cn/list?id=3;"),
        vec!["https://kjj.gov.cn/list?id=3"]
    );
}

#[test]
fn punctuation_converter_exempts_domains_emails_and_ranges() {
    let converter = PunctuationConverter::new().expect("punctuation regex");
    assert_eq!(
        converter.exempt_spans("访问www.hefei.gov.cn或于2024-2025年"),
        vec!["www.hefei.gov.cn", "2024-2025"]
    );
    assert_eq!(
        converter.latin_to_cjk("联系邮箱:kjj@hefei.gov.cn"),
        "联系邮箱：kjj@hefei.gov.cn"
    );
}

#[test]
fn punctuation_converter_toggles_quotes_and_handles_runs() {
    let converter = PunctuationConverter::new().expect("punctuation regex");
    assert_eq!(
        converter.latin_to_cjk("他说\"你好\",'好'"),
        "他说“你好”，‘好’"
    );
    assert_eq!(converter.latin_to_cjk("甲--乙-丙"), "甲——乙－丙");
    assert_eq!(converter.latin_to_cjk("等等..."), "等等…");
    assert_eq!(converter.latin_to_cjk("增长3.5倍"), "增长3.5倍");
}

#[test]
fn time_punctuation_converts_only_between_digits() {
    assert_eq!(
        convert_cjk_time_punctuation_to_latin("上午9：30至2024－2025年，一：二"),
        "上午9:30至2024-2025年，一：二"
    );
}

#[test]
fn punct_pipeline_optionally_restores_times_first() {
    let engine = engine();
    assert_eq!(
        rendered(engine.run(Pipeline::Punctuation { time_to_latin: true }, "时间:9：30")),
        "时间：9:30"
    );
    assert_eq!(
        rendered(engine.run(Pipeline::Punctuation { time_to_latin: false }, "时间:9：30")),
        "时间：9：30"
    );
}

#[test]
fn strip_markers_separates_items_with_blank_lines() {
    let engine = engine();
    let output = rendered(engine.run(
        Pipeline::StripMarkers,
        "1. 加强组织领导;\n\n2025年度目标:完成100家\n（二）强化保障",
    ));

    assert_eq!(
        output,
        "加强组织领导。\n\n2025年度目标：完成100家。\n\n强化保障。"
    );
}

#[test]
fn add_br_compacts_and_tags_each_line() {
    let engine = engine();
    assert_eq!(
        rendered(engine.run(Pipeline::AppendLineBreaks, "第一行 内容\n\n 第二行")),
        "第一行内容<br>\n第二行<br>"
    );
}

#[test]
fn segment_groups_continuation_lines_under_markers() {
    let engine = engine();
    let output = rendered(engine.run(
        Pipeline::Segment,
        "一、总体要求\n坚持创新驱动\n二、主要任务\n培育高新技术企业",
    ));

    assert_eq!(
        output,
        "一、总体要求坚持创新驱动。\n二、主要任务培育高新技术企业。"
    );
}

#[test]
fn segment_splits_plain_text_into_sentences() {
    let engine = engine();
    let output = rendered(engine.run(
        Pipeline::Segment,
        "企业应当如实申报。材料不全的不予受理！\n请于5月底前提交",
    ));

    assert_eq!(
        output,
        "企业应当如实申报。\n材料不全的不予受理！\n请于5月底前提交。"
    );
}

#[test]
fn smart_keeps_one_item_per_line() {
    let engine = engine();
    let output = rendered(engine.run(
        Pipeline::Smart,
        "一、申报条件：<br>\n企业注册地在合肥市。\n二、申报材料:<BR/>\n营业执照复印件。",
    ));

    assert_eq!(
        output,
        "一、申报条件：企业注册地在合肥市。\n二、申报材料：营业执照复印件。"
    );
}

#[test]
fn smart_splits_before_year_lead_ins() {
    let engine = engine();
    assert_eq!(
        rendered(engine.run(
            Pipeline::Smart,
            "2024年度总结：完成目标。2025年计划：继续推进。"
        )),
        "2024年度总结：完成目标。\n2025年计划：继续推进。"
    );
}

#[test]
fn smart_folds_unmarked_text_into_one_line() {
    let engine = engine();
    assert_eq!(
        rendered(engine.run(Pipeline::Smart, "这是第一行\n 这是 第二行 ")),
        "这是第一行这是第二行"
    );
}

#[test]
fn flagged_keywords_are_reported_per_line_once() {
    let engine = engine();
    let flagged = engine.find_flagged_keywords(
        "我市将开展申报工作，详见附件1。\n本通知自发布之日起施行，我市我市企业均可申报。\n附件 2：申报书",
    );

    let pairs = flagged
        .iter()
        .map(|entry| (entry.line_number, entry.token.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        pairs,
        vec![
            (1, "我市"),
            (1, "附件1"),
            (2, "本通知"),
            (2, "我市"),
            (3, "附件 2"),
        ]
    );
}

#[test]
fn blank_input_is_reported_instead_of_rendered() {
    let engine = engine();
    let pipelines = [
        Pipeline::Renumber(NumberingScheme::Level1Flat),
        Pipeline::Renumber(NumberingScheme::Level2Flat),
        Pipeline::Renumber(NumberingScheme::TwoLevelNested),
        Pipeline::StripMarkers,
        Pipeline::AppendLineBreaks,
        Pipeline::Segment,
        Pipeline::Smart,
        Pipeline::Punctuation { time_to_latin: true },
    ];

    for pipeline in pipelines {
        assert_eq!(
            engine.run(pipeline, "  \n\u{200B}\t"),
            PipelineOutcome::EmptyInput,
            "pipeline: {}",
            pipeline.as_str()
        );
    }
}
