//! AWS Elemental MediaConvert (`mediaconvert`, REST-JSON, 2017-08-29).

use super::{HttpMethod::*, Member, Operation, Paginator, Protocol, ServiceModel};

pub static SERVICE: ServiceModel = ServiceModel {
    name: "MediaConvert",
    endpoint_prefix: "mediaconvert",
    signing_name: "mediaconvert",
    api_version: "2017-08-29",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    env_suffix: "MEDIACONVERT",
    operations: &[
        &ASSOCIATE_CERTIFICATE,
        &CANCEL_JOB,
        &CREATE_JOB,
        &CREATE_JOB_TEMPLATE,
        &CREATE_PRESET,
        &CREATE_QUEUE,
        &DELETE_JOB_TEMPLATE,
        &DELETE_POLICY,
        &DELETE_PRESET,
        &DELETE_QUEUE,
        &DESCRIBE_ENDPOINTS,
        &DISASSOCIATE_CERTIFICATE,
        &GET_JOB,
        &GET_JOB_TEMPLATE,
        &GET_POLICY,
        &GET_PRESET,
        &GET_QUEUE,
        &LIST_JOB_TEMPLATES,
        &LIST_JOBS,
        &LIST_PRESETS,
        &LIST_QUEUES,
        &LIST_TAGS_FOR_RESOURCE,
        &PUT_POLICY,
        &TAG_RESOURCE,
        &UNTAG_RESOURCE,
        &UPDATE_JOB_TEMPLATE,
        &UPDATE_PRESET,
        &UPDATE_QUEUE,
    ],
};

const PAGES: Paginator = Paginator::next_token();

pub const ASSOCIATE_CERTIFICATE: Operation = Operation {
    name: "AssociateCertificate",
    method: Post,
    uri: "/2017-08-29/certificates",
    members: &[Member::body("arn").required()],
    paginator: None,
};

pub const CANCEL_JOB: Operation = Operation {
    name: "CancelJob",
    method: Delete,
    uri: "/2017-08-29/jobs/{id}",
    members: &[Member::label("id")],
    paginator: None,
};

pub const CREATE_JOB: Operation = Operation {
    name: "CreateJob",
    method: Post,
    uri: "/2017-08-29/jobs",
    members: &[
        Member::body("accelerationSettings"),
        Member::body("billingTagsSource"),
        Member::body("clientRequestToken").idempotency_token(),
        Member::body("hopDestinations"),
        Member::body("jobTemplate"),
        Member::body("priority"),
        Member::body("queue"),
        Member::body("role").required(),
        Member::body("settings").required(),
        Member::body("simulateReservedQueue"),
        Member::body("statusUpdateInterval"),
        Member::body("tags"),
        Member::body("userMetadata"),
    ],
    paginator: None,
};

pub const CREATE_JOB_TEMPLATE: Operation = Operation {
    name: "CreateJobTemplate",
    method: Post,
    uri: "/2017-08-29/jobTemplates",
    members: &[
        Member::body("accelerationSettings"),
        Member::body("category"),
        Member::body("description"),
        Member::body("hopDestinations"),
        Member::body("name").required(),
        Member::body("priority"),
        Member::body("queue"),
        Member::body("settings").required(),
        Member::body("statusUpdateInterval"),
        Member::body("tags"),
    ],
    paginator: None,
};

pub const CREATE_PRESET: Operation = Operation {
    name: "CreatePreset",
    method: Post,
    uri: "/2017-08-29/presets",
    members: &[
        Member::body("category"),
        Member::body("description"),
        Member::body("name").required(),
        Member::body("settings").required(),
        Member::body("tags"),
    ],
    paginator: None,
};

pub const CREATE_QUEUE: Operation = Operation {
    name: "CreateQueue",
    method: Post,
    uri: "/2017-08-29/queues",
    members: &[
        Member::body("description"),
        Member::body("name").required(),
        Member::body("pricingPlan"),
        Member::body("reservationPlanSettings"),
        Member::body("status"),
        Member::body("tags"),
    ],
    paginator: None,
};

pub const DELETE_JOB_TEMPLATE: Operation = Operation {
    name: "DeleteJobTemplate",
    method: Delete,
    uri: "/2017-08-29/jobTemplates/{name}",
    members: &[Member::label("name")],
    paginator: None,
};

pub const DELETE_POLICY: Operation = Operation {
    name: "DeletePolicy",
    method: Delete,
    uri: "/2017-08-29/policy",
    members: &[],
    paginator: None,
};

pub const DELETE_PRESET: Operation = Operation {
    name: "DeletePreset",
    method: Delete,
    uri: "/2017-08-29/presets/{name}",
    members: &[Member::label("name")],
    paginator: None,
};

pub const DELETE_QUEUE: Operation = Operation {
    name: "DeleteQueue",
    method: Delete,
    uri: "/2017-08-29/queues/{name}",
    members: &[Member::label("name")],
    paginator: None,
};

pub const DESCRIBE_ENDPOINTS: Operation = Operation {
    name: "DescribeEndpoints",
    method: Post,
    uri: "/2017-08-29/endpoints",
    members: &[
        Member::body("maxResults"),
        Member::body("mode"),
        Member::body("nextToken"),
    ],
    paginator: Some(PAGES),
};

pub const DISASSOCIATE_CERTIFICATE: Operation = Operation {
    name: "DisassociateCertificate",
    method: Delete,
    uri: "/2017-08-29/certificates/{arn}",
    members: &[Member::label("arn")],
    paginator: None,
};

pub const GET_JOB: Operation = Operation {
    name: "GetJob",
    method: Get,
    uri: "/2017-08-29/jobs/{id}",
    members: &[Member::label("id")],
    paginator: None,
};

pub const GET_JOB_TEMPLATE: Operation = Operation {
    name: "GetJobTemplate",
    method: Get,
    uri: "/2017-08-29/jobTemplates/{name}",
    members: &[Member::label("name")],
    paginator: None,
};

pub const GET_POLICY: Operation = Operation {
    name: "GetPolicy",
    method: Get,
    uri: "/2017-08-29/policy",
    members: &[],
    paginator: None,
};

pub const GET_PRESET: Operation = Operation {
    name: "GetPreset",
    method: Get,
    uri: "/2017-08-29/presets/{name}",
    members: &[Member::label("name")],
    paginator: None,
};

pub const GET_QUEUE: Operation = Operation {
    name: "GetQueue",
    method: Get,
    uri: "/2017-08-29/queues/{name}",
    members: &[Member::label("name")],
    paginator: None,
};

pub const LIST_JOB_TEMPLATES: Operation = Operation {
    name: "ListJobTemplates",
    method: Get,
    uri: "/2017-08-29/jobTemplates",
    members: &[
        Member::query("category", "category"),
        Member::query("listBy", "listBy"),
        Member::query("maxResults", "maxResults"),
        Member::query("nextToken", "nextToken"),
        Member::query("order", "order"),
    ],
    paginator: Some(PAGES),
};

pub const LIST_JOBS: Operation = Operation {
    name: "ListJobs",
    method: Get,
    uri: "/2017-08-29/jobs",
    members: &[
        Member::query("maxResults", "maxResults"),
        Member::query("nextToken", "nextToken"),
        Member::query("order", "order"),
        Member::query("queue", "queue"),
        Member::query("status", "status"),
    ],
    paginator: Some(PAGES),
};

pub const LIST_PRESETS: Operation = Operation {
    name: "ListPresets",
    method: Get,
    uri: "/2017-08-29/presets",
    members: &[
        Member::query("category", "category"),
        Member::query("listBy", "listBy"),
        Member::query("maxResults", "maxResults"),
        Member::query("nextToken", "nextToken"),
        Member::query("order", "order"),
    ],
    paginator: Some(PAGES),
};

pub const LIST_QUEUES: Operation = Operation {
    name: "ListQueues",
    method: Get,
    uri: "/2017-08-29/queues",
    members: &[
        Member::query("listBy", "listBy"),
        Member::query("maxResults", "maxResults"),
        Member::query("nextToken", "nextToken"),
        Member::query("order", "order"),
    ],
    paginator: Some(PAGES),
};

pub const LIST_TAGS_FOR_RESOURCE: Operation = Operation {
    name: "ListTagsForResource",
    method: Get,
    uri: "/2017-08-29/tags/{arn}",
    members: &[Member::label("arn")],
    paginator: None,
};

pub const PUT_POLICY: Operation = Operation {
    name: "PutPolicy",
    method: Put,
    uri: "/2017-08-29/policy",
    members: &[Member::body("policy").required()],
    paginator: None,
};

pub const TAG_RESOURCE: Operation = Operation {
    name: "TagResource",
    method: Post,
    uri: "/2017-08-29/tags",
    members: &[
        Member::body("arn").required(),
        Member::body("tags").required(),
    ],
    paginator: None,
};

pub const UNTAG_RESOURCE: Operation = Operation {
    name: "UntagResource",
    method: Put,
    uri: "/2017-08-29/tags/{arn}",
    members: &[Member::label("arn"), Member::body("tagKeys")],
    paginator: None,
};

pub const UPDATE_JOB_TEMPLATE: Operation = Operation {
    name: "UpdateJobTemplate",
    method: Put,
    uri: "/2017-08-29/jobTemplates/{name}",
    members: &[
        Member::body("accelerationSettings"),
        Member::body("category"),
        Member::body("description"),
        Member::body("hopDestinations"),
        Member::label("name"),
        Member::body("priority"),
        Member::body("queue"),
        Member::body("settings"),
        Member::body("statusUpdateInterval"),
    ],
    paginator: None,
};

pub const UPDATE_PRESET: Operation = Operation {
    name: "UpdatePreset",
    method: Put,
    uri: "/2017-08-29/presets/{name}",
    members: &[
        Member::body("category"),
        Member::body("description"),
        Member::label("name"),
        Member::body("settings"),
    ],
    paginator: None,
};

pub const UPDATE_QUEUE: Operation = Operation {
    name: "UpdateQueue",
    method: Put,
    uri: "/2017-08-29/queues/{name}",
    members: &[
        Member::body("description"),
        Member::label("name"),
        Member::body("reservationPlanSettings"),
        Member::body("status"),
    ],
    paginator: None,
};
