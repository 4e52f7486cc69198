#![cfg(all(feature = "csv", feature = "json"))]

use gearparams::{
    data::csv::load_sheet,
    game_types::BaseParamId,
    items::{Equipment, EquipmentKind},
    params::{BaseParamTables, ParameterType, ParameterValue},
};

const SHEET: &str = "\
key,LevelItem,EquipSlotCategory,BaseParamModifier,ItemSpecialBonus,Damage{Phys},Damage{Mag},BaseParam[0],BaseParamValue[0],BaseParam[1],BaseParamValue[1],BaseParam{Special}[0],BaseParamValue{Special}[0],BaseParam{Special}[1],BaseParamValue{Special}[1]
3000,560,1,3,1,132,0,27,20,44,0,27,10,0,40
3001,560,1,3,2,132,0,27,20,0,0,44,6,,
";

const TABLES: &str = r#"{
    "item_levels": [{ "item_level": 560, "max_values": { "27": 100, "44": 80 } }],
    "base_params": [
        { "base_param": 27, "slot_factors": { "1": 5000 }, "role_modifiers": { "3": 10000 } },
        { "base_param": 44, "slot_factors": { "1": 5000 }, "role_modifiers": { "3": 10000 } }
    ]
}"#;

#[test]
fn caps_from_exported_files() {
    let sheet = load_sheet("Item", SHEET.as_bytes()).unwrap();
    let tables = BaseParamTables::from_json_reader(TABLES.as_bytes()).unwrap();
    let crt = BaseParamId::new(27);
    let det = BaseParamId::new(44);

    let weapon = Equipment::from_sheet(&sheet, 3000, EquipmentKind::Weapon).unwrap();
    let all = weapon.all_parameters().unwrap();
    assert_eq!(
        all.base_params().collect::<Vec<_>>(),
        [BaseParamId::new(12), crt, det]
    );
    assert_eq!(
        all.get(crt).unwrap().values(),
        [ParameterValue::base(20), ParameterValue::hq(10)]
    );

    assert_eq!(weapon.materia_meld_cap(&tables, crt, false).unwrap(), 30);
    assert_eq!(weapon.materia_meld_cap(&tables, crt, true).unwrap(), 20);
    assert_eq!(weapon.materia_meld_cap(&tables, det, true).unwrap(), 40);
}

#[test]
fn weapon_caps_skip_damage() {
    let sheet = load_sheet("Item", SHEET.as_bytes()).unwrap();
    let tables = BaseParamTables::from_json_reader(TABLES.as_bytes()).unwrap();

    let weapon = Equipment::from_sheet(&sheet, 3000, EquipmentKind::Weapon).unwrap();
    assert!(weapon.all_parameters().unwrap().contains(BaseParamId::new(12)));
    assert_eq!(
        weapon.materia_meld_caps(&tables, false).unwrap(),
        [(BaseParamId::new(27), 30), (BaseParamId::new(44), 40)]
    );
    assert_eq!(
        weapon.materia_meld_caps(&tables, true).unwrap(),
        [(BaseParamId::new(27), 20), (BaseParamId::new(44), 40)]
    );
}

#[test]
fn set_bonus_values_do_not_count() {
    let sheet = load_sheet("Item", SHEET.as_bytes()).unwrap();
    let tables = BaseParamTables::from_json_reader(TABLES.as_bytes()).unwrap();
    let det = BaseParamId::new(44);

    let weapon = Equipment::from_sheet(&sheet, 3001, EquipmentKind::Weapon).unwrap();
    assert_eq!(
        weapon
            .secondary_parameters()
            .unwrap()
            .sum_of(det, ParameterType::SetBonus),
        6
    );
    assert_eq!(weapon.materia_meld_cap(&tables, det, true).unwrap(), 40);
}
