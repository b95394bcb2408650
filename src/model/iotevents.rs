//! AWS IoT Events (`iotevents`, REST-JSON, 2018-07-27).

use super::{HttpMethod::*, Member, Operation, Paginator, Protocol, ServiceModel};

pub static SERVICE: ServiceModel = ServiceModel {
    name: "IoT Events",
    endpoint_prefix: "iotevents",
    signing_name: "iotevents",
    api_version: "2018-07-27",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    env_suffix: "IOT_EVENTS",
    operations: &[
        &CREATE_ALARM_MODEL,
        &CREATE_DETECTOR_MODEL,
        &CREATE_INPUT,
        &DELETE_ALARM_MODEL,
        &DELETE_DETECTOR_MODEL,
        &DELETE_INPUT,
        &DESCRIBE_ALARM_MODEL,
        &DESCRIBE_DETECTOR_MODEL,
        &DESCRIBE_DETECTOR_MODEL_ANALYSIS,
        &DESCRIBE_INPUT,
        &DESCRIBE_LOGGING_OPTIONS,
        &GET_DETECTOR_MODEL_ANALYSIS_RESULTS,
        &LIST_ALARM_MODEL_VERSIONS,
        &LIST_ALARM_MODELS,
        &LIST_DETECTOR_MODEL_VERSIONS,
        &LIST_DETECTOR_MODELS,
        &LIST_INPUTS,
        &LIST_TAGS_FOR_RESOURCE,
        &PUT_LOGGING_OPTIONS,
        &START_DETECTOR_MODEL_ANALYSIS,
        &TAG_RESOURCE,
        &UNTAG_RESOURCE,
        &UPDATE_ALARM_MODEL,
        &UPDATE_DETECTOR_MODEL,
        &UPDATE_INPUT,
    ],
};

pub const CREATE_ALARM_MODEL: Operation = Operation {
    name: "CreateAlarmModel",
    method: Post,
    uri: "/alarm-models",
    members: &[
        Member::body("alarmModelName").required(),
        Member::body("alarmModelDescription"),
        Member::body("roleArn").required(),
        Member::body("tags"),
        Member::body("key"),
        Member::body("severity"),
        Member::body("alarmRule").required(),
        Member::body("alarmNotification"),
        Member::body("alarmEventActions"),
        Member::body("alarmCapabilities"),
    ],
    paginator: None,
};

pub const CREATE_DETECTOR_MODEL: Operation = Operation {
    name: "CreateDetectorModel",
    method: Post,
    uri: "/detector-models",
    members: &[
        Member::body("detectorModelName").required(),
        Member::body("detectorModelDefinition").required(),
        Member::body("detectorModelDescription"),
        Member::body("key"),
        Member::body("roleArn").required(),
        Member::body("tags"),
        Member::body("evaluationMethod"),
    ],
    paginator: None,
};

pub const CREATE_INPUT: Operation = Operation {
    name: "CreateInput",
    method: Post,
    uri: "/inputs",
    members: &[
        Member::body("inputName").required(),
        Member::body("inputDescription"),
        Member::body("inputDefinition").required(),
        Member::body("tags"),
    ],
    paginator: None,
};

pub const DELETE_ALARM_MODEL: Operation = Operation {
    name: "DeleteAlarmModel",
    method: Delete,
    uri: "/alarm-models/{alarmModelName}",
    members: &[Member::label("alarmModelName")],
    paginator: None,
};

pub const DELETE_DETECTOR_MODEL: Operation = Operation {
    name: "DeleteDetectorModel",
    method: Delete,
    uri: "/detector-models/{detectorModelName}",
    members: &[Member::label("detectorModelName")],
    paginator: None,
};

pub const DELETE_INPUT: Operation = Operation {
    name: "DeleteInput",
    method: Delete,
    uri: "/inputs/{inputName}",
    members: &[Member::label("inputName")],
    paginator: None,
};

pub const DESCRIBE_ALARM_MODEL: Operation = Operation {
    name: "DescribeAlarmModel",
    method: Get,
    uri: "/alarm-models/{alarmModelName}",
    members: &[
        Member::label("alarmModelName"),
        Member::query("alarmModelVersion", "version"),
    ],
    paginator: None,
};

pub const DESCRIBE_DETECTOR_MODEL: Operation = Operation {
    name: "DescribeDetectorModel",
    method: Get,
    uri: "/detector-models/{detectorModelName}",
    members: &[
        Member::label("detectorModelName"),
        Member::query("detectorModelVersion", "version"),
    ],
    paginator: None,
};

pub const DESCRIBE_DETECTOR_MODEL_ANALYSIS: Operation = Operation {
    name: "DescribeDetectorModelAnalysis",
    method: Get,
    uri: "/analysis/detector-models/{analysisId}",
    members: &[Member::label("analysisId")],
    paginator: None,
};

pub const DESCRIBE_INPUT: Operation = Operation {
    name: "DescribeInput",
    method: Get,
    uri: "/inputs/{inputName}",
    members: &[Member::label("inputName")],
    paginator: None,
};

pub const DESCRIBE_LOGGING_OPTIONS: Operation = Operation {
    name: "DescribeLoggingOptions",
    method: Get,
    uri: "/logging",
    members: &[],
    paginator: None,
};

pub const GET_DETECTOR_MODEL_ANALYSIS_RESULTS: Operation = Operation {
    name: "GetDetectorModelAnalysisResults",
    method: Get,
    uri: "/analysis/detector-models/{analysisId}/results",
    members: &[
        Member::label("analysisId"),
        Member::query("nextToken", "nextToken"),
        Member::query("maxResults", "maxResults"),
    ],
    paginator: Some(Paginator::next_token()),
};

pub const LIST_ALARM_MODEL_VERSIONS: Operation = Operation {
    name: "ListAlarmModelVersions",
    method: Get,
    uri: "/alarm-models/{alarmModelName}/versions",
    members: &[
        Member::label("alarmModelName"),
        Member::query("nextToken", "nextToken"),
        Member::query("maxResults", "maxResults"),
    ],
    paginator: Some(Paginator::next_token()),
};

pub const LIST_ALARM_MODELS: Operation = Operation {
    name: "ListAlarmModels",
    method: Get,
    uri: "/alarm-models",
    members: &[
        Member::query("nextToken", "nextToken"),
        Member::query("maxResults", "maxResults"),
    ],
    paginator: Some(Paginator::next_token()),
};

pub const LIST_DETECTOR_MODEL_VERSIONS: Operation = Operation {
    name: "ListDetectorModelVersions",
    method: Get,
    uri: "/detector-models/{detectorModelName}/versions",
    members: &[
        Member::label("detectorModelName"),
        Member::query("nextToken", "nextToken"),
        Member::query("maxResults", "maxResults"),
    ],
    paginator: Some(Paginator::next_token()),
};

pub const LIST_DETECTOR_MODELS: Operation = Operation {
    name: "ListDetectorModels",
    method: Get,
    uri: "/detector-models",
    members: &[
        Member::query("nextToken", "nextToken"),
        Member::query("maxResults", "maxResults"),
    ],
    paginator: Some(Paginator::next_token()),
};

pub const LIST_INPUTS: Operation = Operation {
    name: "ListInputs",
    method: Get,
    uri: "/inputs",
    members: &[
        Member::query("nextToken", "nextToken"),
        Member::query("maxResults", "maxResults"),
    ],
    paginator: Some(Paginator::next_token()),
};

pub const LIST_TAGS_FOR_RESOURCE: Operation = Operation {
    name: "ListTagsForResource",
    method: Get,
    uri: "/tags",
    members: &[Member::query("resourceArn", "resourceArn").required()],
    paginator: None,
};

pub const PUT_LOGGING_OPTIONS: Operation = Operation {
    name: "PutLoggingOptions",
    method: Put,
    uri: "/logging",
    members: &[Member::body("loggingOptions").required()],
    paginator: None,
};

pub const START_DETECTOR_MODEL_ANALYSIS: Operation = Operation {
    name: "StartDetectorModelAnalysis",
    method: Post,
    uri: "/analysis/detector-models",
    members: &[Member::body("detectorModelDefinition").required()],
    paginator: None,
};

pub const TAG_RESOURCE: Operation = Operation {
    name: "TagResource",
    method: Post,
    uri: "/tags",
    members: &[
        Member::query("resourceArn", "resourceArn").required(),
        Member::body("tags").required(),
    ],
    paginator: None,
};

pub const UNTAG_RESOURCE: Operation = Operation {
    name: "UntagResource",
    method: Delete,
    uri: "/tags",
    members: &[
        Member::query("resourceArn", "resourceArn").required(),
        Member::query("tagKeys", "tagKeys").required(),
    ],
    paginator: None,
};

pub const UPDATE_ALARM_MODEL: Operation = Operation {
    name: "UpdateAlarmModel",
    method: Post,
    uri: "/alarm-models/{alarmModelName}",
    members: &[
        Member::label("alarmModelName"),
        Member::body("alarmModelDescription"),
        Member::body("roleArn").required(),
        Member::body("severity"),
        Member::body("alarmRule").required(),
        Member::body("alarmNotification"),
        Member::body("alarmEventActions"),
        Member::body("alarmCapabilities"),
    ],
    paginator: None,
};

pub const UPDATE_DETECTOR_MODEL: Operation = Operation {
    name: "UpdateDetectorModel",
    method: Post,
    uri: "/detector-models/{detectorModelName}",
    members: &[
        Member::label("detectorModelName"),
        Member::body("detectorModelDefinition").required(),
        Member::body("detectorModelDescription"),
        Member::body("roleArn").required(),
        Member::body("evaluationMethod"),
    ],
    paginator: None,
};

pub const UPDATE_INPUT: Operation = Operation {
    name: "UpdateInput",
    method: Put,
    uri: "/inputs/{inputName}",
    members: &[
        Member::label("inputName"),
        Member::body("inputDescription"),
        Member::body("inputDefinition").required(),
    ],
    paginator: None,
};
