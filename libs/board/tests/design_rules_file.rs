//! Loading and writing design rules through the tree format.

use pcb_board::BoardDesignRules;
use pcb_sexpr::{parse, serialize, FormatErrorKind, List};
use pcb_units::{UnsignedLength, UnsignedRatio};
use pretty_assertions::assert_eq;

const RULES: &str = "(design_rules
 (stopmask_clearance_ratio 0.1)
 (stopmask_clearance_min 1.1)
 (stopmask_clearance_max 2.1)
 (stopmask_max_via_drill_diameter 0.2)
 (solderpaste_clearance_ratio 0.3)
 (solderpaste_clearance_min 1.3)
 (solderpaste_clearance_max 2.3)
 (pad_annular_ring_ratio 0.4)
 (pad_annular_ring_min 1.4)
 (pad_annular_ring_max 2.4)
 (via_annular_ring_ratio 0.5)
 (via_annular_ring_min 1.5)
 (via_annular_ring_max 2.5)
)
";

fn nm(value: i64) -> UnsignedLength {
    UnsignedLength::new(value).unwrap()
}

fn ratio(raw: i64) -> UnsignedRatio {
    UnsignedRatio::new(raw).unwrap()
}

#[test]
fn construct_from_text() {
    let rules = BoardDesignRules::from_list(&parse(RULES).unwrap()).unwrap();

    assert_eq!(rules.stop_mask_clearance_ratio(), ratio(10_000));
    assert_eq!(rules.stop_mask_clearance_bounds().min(), nm(1_100_000));
    assert_eq!(rules.stop_mask_clearance_bounds().max(), nm(2_100_000));
    assert_eq!(rules.stop_mask_max_via_drill_diameter(), nm(200_000));
    assert_eq!(rules.solder_paste_clearance_ratio(), ratio(30_000));
    assert_eq!(rules.solder_paste_clearance_bounds().min(), nm(1_300_000));
    assert_eq!(rules.solder_paste_clearance_bounds().max(), nm(2_300_000));
    assert_eq!(rules.pad_annular_ring_ratio(), ratio(40_000));
    assert_eq!(rules.pad_annular_ring_bounds().min(), nm(1_400_000));
    assert_eq!(rules.pad_annular_ring_bounds().max(), nm(2_400_000));
    assert_eq!(rules.via_annular_ring_ratio(), ratio(50_000));
    assert_eq!(rules.via_annular_ring_bounds().min(), nm(1_500_000));
    assert_eq!(rules.via_annular_ring_bounds().max(), nm(2_500_000));
}

#[test]
fn loaded_text_is_written_back_unchanged() {
    let rules = BoardDesignRules::from_list(&parse(RULES).unwrap()).unwrap();
    assert_eq!(serialize(&rules.serialize()), RULES);
}

#[test]
fn serialize_and_deserialize() {
    let mut first = BoardDesignRules::new();
    first.set_stop_mask_clearance_ratio(ratio(11));
    first.set_stop_mask_clearance_bounds(nm(22), nm(33)).unwrap();
    first.set_stop_mask_max_via_drill_diameter(nm(44));
    first.set_solder_paste_clearance_ratio(ratio(55));
    first.set_solder_paste_clearance_bounds(nm(66), nm(77)).unwrap();
    first.set_pad_annular_ring_ratio(ratio(88));
    first.set_pad_annular_ring_bounds(nm(99), nm(111)).unwrap();
    first.set_via_annular_ring_ratio(ratio(222));
    first.set_via_annular_ring_bounds(nm(333), nm(444)).unwrap();

    let mut list1 = List::new("obj");
    first.serialize_into(&mut list1);
    let text1 = serialize(&list1);

    let second = BoardDesignRules::from_list(&parse(&text1).unwrap()).unwrap();
    let mut list2 = List::new("obj");
    second.serialize_into(&mut list2);

    assert_eq!(serialize(&list2), text1);
    assert_eq!(second, first);
}

#[test]
fn missing_field_fails_the_whole_load() {
    let text = RULES.replace(" (via_annular_ring_max 2.5)\n", "");
    let error = BoardDesignRules::from_list(&parse(&text).unwrap()).unwrap_err();

    assert_eq!(
        error.kind,
        FormatErrorKind::MissingChild {
            keyword: "via_annular_ring_max".to_string()
        }
    );
    assert_eq!(error.line(), Some(1));
    assert!(error.to_string().contains("via_annular_ring_max"));
}

#[test]
fn negative_length_is_rejected_with_location() {
    let text = RULES.replace("(pad_annular_ring_min 1.4)", "(pad_annular_ring_min -1.4)");
    let error = BoardDesignRules::from_list(&parse(&text).unwrap()).unwrap_err();

    match &error.kind {
        FormatErrorKind::InvalidValue { keyword, value, .. } => {
            assert_eq!(keyword, "pad_annular_ring_min");
            assert_eq!(value, "-1.4");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(error.line(), Some(10));
    assert_eq!(error.column(), Some(24));
}
