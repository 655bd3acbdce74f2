mod common;

#[path = "assessment/offline.rs"] mod assessment_offline;
