/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#[cfg(feature = "schemars")]
#[test]
fn scalar_schema() {
    use quantities::{AbsoluteTemperature, Length};
    use schemars::schema_for;
    use serde_json::json;

    let length = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(Length)).unwrap(),
    )
    .unwrap();
    let temperature = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(AbsoluteTemperature)).unwrap(),
    )
    .unwrap();

    #[cfg(feature = "serialize_as_string")]
    let (lengths, temperatures) = ([json!("1 km")], [json!("20 °C")]);
    #[cfg(not(feature = "serialize_as_string"))]
    let (lengths, temperatures) = (
        [json!({ "si": 1000.0, "unit": { "Meter": "Kilo" } })],
        [json!({ "si": 293.15, "unit": "Celsius" })],
    );

    lengths.iter().for_each(|example| {
        length.validate(example).expect("schema validation failed");
    });
    temperatures.iter().for_each(|example| {
        temperature
            .validate(example)
            .expect("schema validation failed");
    });
}

#[cfg(feature = "schemars")]
#[test]
fn unit_info_schema() {
    use quantities::{LengthUnit, SiPrefix, Unit, UnitInfo};
    use schemars::schema_for;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(UnitInfo)).unwrap(),
    )
    .unwrap();
    let info =
        serde_json::to_value(LengthUnit::Meter(SiPrefix::Milli).info()).unwrap();
    schema.validate(&info).expect("schema validation failed");
}
