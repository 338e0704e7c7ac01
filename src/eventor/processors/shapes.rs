//! Field-spec tables for the seven Eventor response shapes.
//!
//! The column names are the public output schema.

use super::{ContextSpec, FieldSpec, ShapeSpec, extract_table};
use crate::eventor::models::{ApiResponse, Table};

const EVENT_RACE: &str = ".//EventRace";
const CLASS_RACE_INFO: &str = ".//ClassRaceInfo";

pub const EVENTS: ShapeSpec = ShapeSpec {
    name: "events",
    record_path: ".//Event",
    context: None,
    fields: &[
        FieldSpec::text("EventId", "EventId"),
        FieldSpec::text("Name", "Name"),
        FieldSpec::text("StartDate", "StartDate/Date"),
        FieldSpec::text("StartClock", "StartDate/Clock"),
        FieldSpec::text("FinishDate", "FinishDate/Date"),
        FieldSpec::text("FinishClock", "FinishDate/Clock"),
        FieldSpec::text("EventClassificationId", "EventClassificationId"),
        FieldSpec::text("EventStatusId", "EventStatusId"),
        FieldSpec::text("OrganisationId", ".//Organiser/OrganisationId"),
        FieldSpec::text("WebURL", "WebURL"),
        FieldSpec::attr("PunchingUnitType", "PunchingUnitType", "value"),
        FieldSpec::joined("DisciplineIds", ".//DisciplineId"),
        FieldSpec::attr("EventRaceDistance", ".", "raceDistance").in_group(EVENT_RACE),
        FieldSpec::text("EventRaceId", "EventRaceId").in_group(EVENT_RACE),
        FieldSpec::text("EventRaceName", "Name").in_group(EVENT_RACE),
        FieldSpec::text("RaceDate", "RaceDate/Date").in_group(EVENT_RACE),
        FieldSpec::text("RaceClock", "RaceDate/Clock").in_group(EVENT_RACE),
        FieldSpec::attr("EventCenterX", ".//EventCenterPosition", "x").in_group(EVENT_RACE),
        FieldSpec::attr("EventCenterY", ".//EventCenterPosition", "y").in_group(EVENT_RACE),
        FieldSpec::attr("EventCenterUnit", ".//EventCenterPosition", "unit").in_group(EVENT_RACE),
    ],
};

pub const ORGANISATIONS: ShapeSpec = ShapeSpec {
    name: "organisations",
    record_path: ".//Organisation",
    context: None,
    fields: &[
        FieldSpec::text("OrganisationId", "OrganisationId"),
        FieldSpec::text("Name", "Name"),
        FieldSpec::text("ShortName", "ShortName"),
        FieldSpec::text("MediaName", "MediaName"),
        FieldSpec::text("OrganisationTypeId", "OrganisationTypeId"),
        FieldSpec::attr("CountryId", ".//Country/CountryId", "value"),
        FieldSpec::attr("Alpha3", ".//Country/Alpha3", "value"),
        FieldSpec::text("CountryName_en", ".//Country/Name[@languageId=\"en\"]"),
        FieldSpec::text("CountryName_sv", ".//Country/Name[@languageId=\"sv\"]"),
        FieldSpec::attr("Address_careOf", ".//Address", "careOf"),
        FieldSpec::attr("Address_street", ".//Address", "street"),
        FieldSpec::attr("Address_city", ".//Address", "city"),
        FieldSpec::attr("Address_zipCode", ".//Address", "zipCode"),
        FieldSpec::attr("AddressType", ".//AddressType", "value"),
        FieldSpec::attr("Tele_phoneNumber", ".//Tele", "phoneNumber"),
        FieldSpec::attr("Tele_mobilePhoneNumber", ".//Tele", "mobilePhoneNumber"),
        FieldSpec::attr("Tele_mailAddress", ".//Tele", "mailAddress"),
        FieldSpec::attr("TeleType", ".//TeleType", "value"),
        FieldSpec::text("ParentOrganisationId", ".//ParentOrganisation/OrganisationId"),
        FieldSpec::text("OrganisationStatusId", "OrganisationStatusId"),
        FieldSpec::text("ModifyDate", ".//ModifyDate/Date"),
        FieldSpec::text("ModifyClock", ".//ModifyDate/Clock"),
    ],
};

pub const EVENT_CLASSES: ShapeSpec = ShapeSpec {
    name: "eventclasses",
    record_path: ".//EventClass",
    context: None,
    fields: &[
        FieldSpec::text("EventClassId", "EventClassId"),
        FieldSpec::text("Name", "Name"),
        FieldSpec::text("ClassShortName", "ClassShortName"),
        FieldSpec::attr("EventClassStatus", "EventClassStatus", "value"),
        FieldSpec::text("ClassTypeId", ".//ClassType/ClassTypeId"),
        FieldSpec::text("ClassTypeShortName", ".//ClassType/ShortName"),
        FieldSpec::text("ClassTypeName", ".//ClassType/Name"),
        FieldSpec::text("ExternalId", "ExternalId"),
        FieldSpec::attr("PunchingUnitType", "PunchingUnitType", "value"),
        FieldSpec::text("ClassRaceInfoId", "ClassRaceInfoId").in_group(CLASS_RACE_INFO),
        FieldSpec::text("EventRaceId", "EventRaceId").in_group(CLASS_RACE_INFO),
        FieldSpec::text("ClassRaceName", "Name").in_group(CLASS_RACE_INFO),
        FieldSpec::attr("ClassRaceStatus", "ClassRaceStatus", "value").in_group(CLASS_RACE_INFO),
        FieldSpec::attr("ClassRacePunchingUnitType", "PunchingUnitType", "value")
            .in_group(CLASS_RACE_INFO),
        FieldSpec::attr("MinRunners", ".", "minRunners").in_group(CLASS_RACE_INFO),
        FieldSpec::attr("MaxRunners", ".", "maxRunners").in_group(CLASS_RACE_INFO),
        FieldSpec::attr("NoOfEntries", ".", "noOfEntries").in_group(CLASS_RACE_INFO),
        FieldSpec::attr("NoOfStarts", ".", "noOfStarts").in_group(CLASS_RACE_INFO),
        FieldSpec::attr("Sex", ".", "sex"),
        FieldSpec::attr("NumberOfEntries", ".", "numberOfEntries"),
    ],
};

pub const ENTRY_FEES: ShapeSpec = ShapeSpec {
    name: "entryfees",
    record_path: ".//EntryFee",
    context: None,
    fields: &[
        FieldSpec::text("EntryFeeId", "EntryFeeId"),
        FieldSpec::text("Name", "Name"),
        FieldSpec::text("Amount", "Amount"),
        FieldSpec::attr("Currency", "Amount", "currency"),
        FieldSpec::text("ExternalFee", "ExternalFee"),
        FieldSpec::text("FromDateOfBirth", ".//FromDateOfBirth/Date"),
        FieldSpec::text("ToDateOfBirth", ".//ToDateOfBirth/Date"),
        FieldSpec::text("EntryFeeGroupId", "EntryFeeGroupId"),
        FieldSpec::attr("TaxIncluded", ".", "taxIncluded"),
        FieldSpec::attr("EntryFeeType", ".", "entryFeeType"),
        FieldSpec::attr("Type", ".", "type"),
    ],
};

pub const ENTRIES: ShapeSpec = ShapeSpec {
    name: "entries",
    record_path: ".//Entry",
    context: None,
    fields: &[
        FieldSpec::text("EntryId", "EntryId"),
        FieldSpec::text("CompetitorId", ".//Competitor/CompetitorId"),
        FieldSpec::text("PersonId", ".//Competitor/PersonId"),
        FieldSpec::text("OrganisationId", ".//Competitor/OrganisationId"),
        FieldSpec::text("CCardId", ".//CCard/CCardId"),
        FieldSpec::attr("PunchingUnitType", ".//CCard/PunchingUnitType", "value"),
        FieldSpec::text("EventClassId", ".//EntryClass/EventClassId"),
        FieldSpec::text("EventId", "EventId"),
        FieldSpec::text("EventRaceId", "EventRaceId"),
        FieldSpec::text("BibNumber", "BibNumber"),
        FieldSpec::text("EntryDate", ".//EntryDate/Date"),
        FieldSpec::text("EntryClock", ".//EntryDate/Clock"),
        FieldSpec::text("EntryFeeGroupId", "EntryFeeGroupId"),
        FieldSpec::text("CreatedBy", ".//CreatedBy/PersonId"),
        FieldSpec::text("ModifyDate", ".//ModifyDate/Date"),
        FieldSpec::text("ModifyClock", ".//ModifyDate/Clock"),
        FieldSpec::text("ModifiedBy", ".//ModifiedBy/PersonId"),
    ],
};

pub const COMPETITOR_COUNT: ShapeSpec = ShapeSpec {
    name: "competitorcount",
    record_path: ".//CompetitorCount",
    context: None,
    fields: &[
        FieldSpec::attr("eventId", ".", "eventId"),
        FieldSpec::attr("numberOfEntries", ".", "numberOfEntries"),
        FieldSpec::attr("numberOfStarts", ".", "numberOfStarts"),
    ],
};

pub const MEMBERSHIPS: ShapeSpec = ShapeSpec {
    name: "memberships",
    record_path: ".//Membership",
    context: Some(ContextSpec {
        path: ".//Organisation",
        fields: &[
            FieldSpec::text("OrganisationId", "Id"),
            FieldSpec::text("OrganisationName", "Name"),
            FieldSpec::text("OrganisationShortName", "ShortName"),
        ],
    }),
    fields: &[
        FieldSpec::text("MembershipId", "Id"),
        FieldSpec::text("Year", "Year"),
        FieldSpec::text("TypeId", ".//Type/Id"),
        FieldSpec::text("TypeName", ".//Type/Name"),
        FieldSpec::text("PersonId", ".//Person/Id"),
        FieldSpec::text("FirstName", ".//Person/FirstName"),
        FieldSpec::text("LastName", ".//Person/LastName"),
        FieldSpec::text("BirthDate", ".//Person/BirthDate"),
        FieldSpec::text("Sex", ".//Person/Sex"),
        FieldSpec::text("PaidTime", "PaidTime"),
    ],
};

pub fn events_table(response: &ApiResponse) -> Table {
    extract_table(response, &EVENTS)
}

pub fn organisations_table(response: &ApiResponse) -> Table {
    extract_table(response, &ORGANISATIONS)
}

pub fn event_classes_table(response: &ApiResponse) -> Table {
    extract_table(response, &EVENT_CLASSES)
}

pub fn entry_fees_table(response: &ApiResponse) -> Table {
    extract_table(response, &ENTRY_FEES)
}

pub fn entries_table(response: &ApiResponse) -> Table {
    extract_table(response, &ENTRIES)
}

pub fn competitor_count_table(response: &ApiResponse) -> Table {
    extract_table(response, &COMPETITOR_COUNT)
}

pub fn memberships_table(response: &ApiResponse) -> Table {
    extract_table(response, &MEMBERSHIPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventor::xml::Element;

    fn parse(xml: &str) -> ApiResponse {
        ApiResponse::Document(Element::parse(xml).unwrap())
    }

    #[test]
    fn test_event_race_without_center_position() {
        let response = parse(
            r#"<EventList>
                <Event>
                    <EventId>1001</EventId>
                    <Name>State Sprint</Name>
                    <StartDate><Date>2024-05-04</Date><Clock>09:00:00</Clock></StartDate>
                    <Organiser><OrganisationId>7</OrganisationId></Organiser>
                    <PunchingUnitType value="SI"/>
                    <EventRace raceDistance="5000">
                        <EventRaceId>2001</EventRaceId>
                        <Name>Day 1</Name>
                        <RaceDate><Date>2024-05-04</Date></RaceDate>
                    </EventRace>
                </Event>
            </EventList>"#,
        );
        let table = events_table(&response);
        assert_eq!(table.len(), 1);

        let event = &table.records()[0];
        assert_eq!(event.get("EventId"), Some("1001"));
        assert_eq!(event.get("StartClock"), Some("09:00:00"));
        assert_eq!(event.get("FinishDate"), None);
        assert_eq!(event.get("OrganisationId"), Some("7"));
        assert_eq!(event.get("PunchingUnitType"), Some("SI"));
        assert_eq!(event.get("EventRaceDistance"), Some("5000"));
        assert_eq!(event.get("EventRaceId"), Some("2001"));
        assert_eq!(event.get("EventRaceName"), Some("Day 1"));
        assert_eq!(event.get("RaceDate"), Some("2024-05-04"));
        assert_eq!(event.get("RaceClock"), None);
        assert_eq!(event.get("EventCenterX"), None);
        assert_eq!(event.get("EventCenterY"), None);
        assert_eq!(event.get("EventCenterUnit"), None);
        assert_eq!(event.len(), EVENTS.fields.len());
    }

    #[test]
    fn test_event_without_race_keeps_all_columns() {
        let response = parse(
            r#"<EventList><Event><EventId>1</EventId>
                <DisciplineId>1</DisciplineId><DisciplineId>4</DisciplineId>
            </Event></EventList>"#,
        );
        let table = events_table(&response);
        let event = &table.records()[0];
        assert_eq!(event.get("DisciplineIds"), Some("1, 4"));
        for column in [
            "EventRaceDistance",
            "EventRaceId",
            "EventRaceName",
            "RaceDate",
            "RaceClock",
            "EventCenterX",
        ] {
            assert!(event.has_column(column));
            assert_eq!(event.get(column), None, "{column} should be null");
        }
    }

    #[test]
    fn test_event_center_position() {
        let response = parse(
            r#"<EventList><Event><EventId>1</EventId>
                <EventRace><EventCenterPosition x="151.2" y="-33.8" unit="degrees"/></EventRace>
            </Event></EventList>"#,
        );
        let table = events_table(&response);
        let event = &table.records()[0];
        assert_eq!(event.get("EventCenterX"), Some("151.2"));
        assert_eq!(event.get("EventCenterY"), Some("-33.8"));
        assert_eq!(event.get("EventCenterUnit"), Some("degrees"));
        assert_eq!(event.get("EventRaceDistance"), None);
    }

    #[test]
    fn test_organisations() {
        let response = parse(
            r#"<OrganisationList>
                <Organisation>
                    <OrganisationId>7</OrganisationId>
                    <Name>Acme Orienteers</Name>
                    <ShortName>Acme</ShortName>
                    <OrganisationTypeId>3</OrganisationTypeId>
                    <Country>
                        <CountryId value="36"/>
                        <Alpha3 value="AUS"/>
                        <Name languageId="en">Australia</Name>
                        <Name languageId="sv">Australien</Name>
                    </Country>
                    <Address careOf="Club House" street="1 Forest Rd" city="Bush" zipCode="2000"/>
                    <Tele mailAddress="club@example.com"/>
                    <ParentOrganisation><OrganisationId>2</OrganisationId></ParentOrganisation>
                    <ModifyDate><Date>2023-01-02</Date><Clock>10:11:12</Clock></ModifyDate>
                </Organisation>
                <Organisation><OrganisationId>8</OrganisationId></Organisation>
            </OrganisationList>"#,
        );
        let table = organisations_table(&response);
        assert_eq!(table.len(), 2);

        let acme = &table.records()[0];
        assert_eq!(acme.get("Name"), Some("Acme Orienteers"));
        assert_eq!(acme.get("CountryId"), Some("36"));
        assert_eq!(acme.get("Alpha3"), Some("AUS"));
        assert_eq!(acme.get("CountryName_en"), Some("Australia"));
        assert_eq!(acme.get("CountryName_sv"), Some("Australien"));
        assert_eq!(acme.get("Address_city"), Some("Bush"));
        assert_eq!(acme.get("AddressType"), None);
        assert_eq!(acme.get("Tele_mailAddress"), Some("club@example.com"));
        assert_eq!(acme.get("Tele_phoneNumber"), None);
        assert_eq!(acme.get("ParentOrganisationId"), Some("2"));
        assert_eq!(acme.get("ModifyClock"), Some("10:11:12"));

        let bare = &table.records()[1];
        assert_eq!(bare.get("OrganisationId"), Some("8"));
        assert_eq!(bare.get("CountryName_en"), None);
        assert_eq!(bare.get("ParentOrganisationId"), None);
    }

    #[test]
    fn test_event_classes() {
        let response = parse(
            r#"<EventClassList>
                <EventClass sex="F" numberOfEntries="12">
                    <EventClassId>55</EventClassId>
                    <Name>Women 21E</Name>
                    <EventClassStatus value="normal"/>
                    <ClassType><ClassTypeId>1</ClassTypeId><ShortName>E</ShortName><Name>Elite</Name></ClassType>
                    <ClassRaceInfo minRunners="1" maxRunners="1" noOfEntries="12" noOfStarts="11">
                        <ClassRaceInfoId>900</ClassRaceInfoId>
                        <EventRaceId>2001</EventRaceId>
                        <ClassRaceStatus value="allocationMade"/>
                    </ClassRaceInfo>
                </EventClass>
            </EventClassList>"#,
        );
        let table = event_classes_table(&response);
        let class = &table.records()[0];
        assert_eq!(class.get("EventClassId"), Some("55"));
        assert_eq!(class.get("Name"), Some("Women 21E"));
        assert_eq!(class.get("EventClassStatus"), Some("normal"));
        assert_eq!(class.get("ClassTypeName"), Some("Elite"));
        assert_eq!(class.get("ClassRaceInfoId"), Some("900"));
        assert_eq!(class.get("ClassRaceName"), None);
        assert_eq!(class.get("ClassRaceStatus"), Some("allocationMade"));
        assert_eq!(class.get("ClassRacePunchingUnitType"), None);
        assert_eq!(class.get("NoOfStarts"), Some("11"));
        assert_eq!(class.get("Sex"), Some("F"));
        assert_eq!(class.get("NumberOfEntries"), Some("12"));
    }

    #[test]
    fn test_entry_fees() {
        let response = parse(
            r#"<EntryFeeList>
                <EntryFee taxIncluded="Y" entryFeeType="eventClass" type="adult">
                    <EntryFeeId>3</EntryFeeId>
                    <Name>Senior</Name>
                    <Amount currency="AUD">25.00</Amount>
                    <FromDateOfBirth><Date>1900-01-01</Date></FromDateOfBirth>
                </EntryFee>
            </EntryFeeList>"#,
        );
        let table = entry_fees_table(&response);
        let fee = &table.records()[0];
        assert_eq!(fee.get("Amount"), Some("25.00"));
        assert_eq!(fee.get("Currency"), Some("AUD"));
        assert_eq!(fee.get("FromDateOfBirth"), Some("1900-01-01"));
        assert_eq!(fee.get("ToDateOfBirth"), None);
        assert_eq!(fee.get("TaxIncluded"), Some("Y"));
        assert_eq!(fee.get("EntryFeeType"), Some("eventClass"));
        assert_eq!(fee.get("Type"), Some("adult"));
    }

    #[test]
    fn test_entries() {
        let response = parse(
            r#"<EntryList>
                <Entry>
                    <EntryId>1</EntryId>
                    <Competitor>
                        <CompetitorId>11</CompetitorId>
                        <PersonId>12</PersonId>
                        <OrganisationId>7</OrganisationId>
                        <CCard><CCardId>123456</CCardId><PunchingUnitType value="SI"/></CCard>
                    </Competitor>
                    <EntryClass><EventClassId>55</EventClassId></EntryClass>
                    <EventId>1001</EventId>
                    <EntryDate><Date>2024-04-01</Date><Clock>08:00:00</Clock></EntryDate>
                    <CreatedBy><PersonId>99</PersonId></CreatedBy>
                </Entry>
                <Entry><EntryId>2</EntryId></Entry>
            </EntryList>"#,
        );
        let table = entries_table(&response);
        assert_eq!(table.column("EntryId"), vec![Some("1"), Some("2")]);

        let entry = &table.records()[0];
        assert_eq!(entry.get("CompetitorId"), Some("11"));
        assert_eq!(entry.get("CCardId"), Some("123456"));
        assert_eq!(entry.get("PunchingUnitType"), Some("SI"));
        assert_eq!(entry.get("EventClassId"), Some("55"));
        assert_eq!(entry.get("EntryClock"), Some("08:00:00"));
        assert_eq!(entry.get("CreatedBy"), Some("99"));
        assert_eq!(entry.get("ModifiedBy"), None);
        assert_eq!(table.records()[1].get("CompetitorId"), None);
    }

    #[test]
    fn test_competitor_count() {
        let response = parse(
            r#"<CompetitorCountList>
                <CompetitorCount eventId="1001" numberOfEntries="250" numberOfStarts="240"/>
                <CompetitorCount eventId="1002" numberOfEntries="10"/>
            </CompetitorCountList>"#,
        );
        let table = competitor_count_table(&response);
        assert_eq!(table.columns(), &["eventId", "numberOfEntries", "numberOfStarts"]);
        assert_eq!(table.column("eventId"), vec![Some("1001"), Some("1002")]);
        assert_eq!(table.column("numberOfStarts"), vec![Some("240"), None]);
    }

    #[test]
    fn test_memberships_repeat_organisation_identity() {
        let response = parse(
            r#"<MembershipList>
                <Organisation><Id>7</Id><Name>Acme</Name></Organisation>
                <Membership>
                    <Id>1</Id><Year>2024</Year>
                    <Type><Id>2</Id><Name>Senior</Name></Type>
                    <Person><Id>12</Id><FirstName>Ada</FirstName><LastName>Lovelace</LastName></Person>
                    <PaidTime>2024-01-05 10:00:00</PaidTime>
                </Membership>
                <Membership><Id>2</Id><Year>2024</Year></Membership>
            </MembershipList>"#,
        );
        let table = memberships_table(&response);
        assert_eq!(table.len(), 2);
        assert_eq!(
            &table.columns()[..3],
            &["OrganisationId", "OrganisationName", "OrganisationShortName"]
        );

        for record in table.records() {
            assert_eq!(record.get("OrganisationId"), Some("7"));
            assert_eq!(record.get("OrganisationName"), Some("Acme"));
            assert_eq!(record.get("OrganisationShortName"), None);
        }

        let first = &table.records()[0];
        assert_eq!(first.get("MembershipId"), Some("1"));
        assert_eq!(first.get("TypeName"), Some("Senior"));
        assert_eq!(first.get("LastName"), Some("Lovelace"));
        assert_eq!(first.get("Sex"), None);
        assert_eq!(table.records()[1].get("PersonId"), None);
    }

    #[test]
    fn test_no_data_gives_empty_tables_for_every_shape() {
        let extractors: [(fn(&ApiResponse) -> Table, &ShapeSpec); 7] = [
            (events_table, &EVENTS),
            (organisations_table, &ORGANISATIONS),
            (event_classes_table, &EVENT_CLASSES),
            (entry_fees_table, &ENTRY_FEES),
            (entries_table, &ENTRIES),
            (competitor_count_table, &COMPETITOR_COUNT),
            (memberships_table, &MEMBERSHIPS),
        ];
        for (extract, shape) in extractors {
            let table = extract(&ApiResponse::NoData);
            assert!(table.is_empty(), "{} should be empty", shape.name);
            assert_eq!(table.columns(), shape.columns().as_slice());
        }
    }
}
