//! Header-row role resolution.

use worktime_model::ColumnRoles;
use worktime_model::layout::{
    DATE_LABEL, HOURS_DETAIL_LABEL, HOURS_LABEL, ORDER_LABEL, ORDER_NAME_LABEL, PROCESS_LABEL,
};

/// Resolves which column serves each semantic role.
///
/// Matching is by substring, first match wins, so decorated headers
/// such as `日付▲` still resolve. The hours role prefers the detailed
/// column and falls back to the plain one.
pub fn resolve_roles(headers: &[String]) -> ColumnRoles {
    ColumnRoles {
        order: find_label(headers, ORDER_LABEL),
        process: find_label(headers, PROCESS_LABEL),
        date: find_label(headers, DATE_LABEL),
        order_name: find_label(headers, ORDER_NAME_LABEL),
        hours: find_label(headers, HOURS_DETAIL_LABEL)
            .or_else(|| find_label(headers, HOURS_LABEL)),
    }
}

fn find_label(headers: &[String], label: &str) -> Option<usize> {
    headers.iter().position(|header| header.contains(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| (*label).to_string()).collect()
    }

    #[test]
    fn resolves_canonical_header_order() {
        let roles = resolve_roles(&headers(&[
            "日付",
            "製造オーダ",
            "製造オーダ名",
            "工程",
            "工数詳細",
        ]));
        assert_eq!(roles.date, Some(0));
        assert_eq!(roles.order, Some(1));
        assert_eq!(roles.order_name, Some(2));
        assert_eq!(roles.process, Some(3));
        assert_eq!(roles.hours, Some(4));
    }

    #[test]
    fn order_label_matches_before_order_name() {
        // 製造オーダ名 contains 製造オーダ, so the order role lands on
        // whichever column appears first. The export always prints the
        // plain order column first, which keeps both roles distinct.
        let roles = resolve_roles(&headers(&["製造オーダ", "製造オーダ名"]));
        assert_eq!(roles.order, Some(0));
        assert_eq!(roles.order_name, Some(1));
    }

    #[test]
    fn decorated_labels_still_resolve() {
        let roles = resolve_roles(&headers(&["日付▲", "工程 (コード)"]));
        assert_eq!(roles.date, Some(0));
        assert_eq!(roles.process, Some(1));
    }

    #[test]
    fn hours_prefers_detail_column() {
        let roles = resolve_roles(&headers(&["工数", "工数詳細"]));
        assert_eq!(roles.hours, Some(1));

        let fallback = resolve_roles(&headers(&["工数", "日付"]));
        assert_eq!(fallback.hours, Some(0));
    }

    #[test]
    fn missing_labels_stay_unresolved() {
        let roles = resolve_roles(&headers(&["備考", "承認"]));
        assert!(!roles.any_resolved());
    }
}
