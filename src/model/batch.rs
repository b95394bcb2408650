//! AWS Batch (`batch`, REST-JSON, 2016-08-10).

use super::{HttpMethod::*, Member, Operation, Paginator, Protocol, ServiceModel};

pub static SERVICE: ServiceModel = ServiceModel {
    name: "Batch",
    endpoint_prefix: "batch",
    signing_name: "batch",
    api_version: "2016-08-10",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    env_suffix: "BATCH",
    operations: &[
        &CANCEL_JOB,
        &CREATE_COMPUTE_ENVIRONMENT,
        &CREATE_JOB_QUEUE,
        &CREATE_SCHEDULING_POLICY,
        &DELETE_COMPUTE_ENVIRONMENT,
        &DELETE_JOB_QUEUE,
        &DELETE_SCHEDULING_POLICY,
        &DEREGISTER_JOB_DEFINITION,
        &DESCRIBE_COMPUTE_ENVIRONMENTS,
        &DESCRIBE_JOB_DEFINITIONS,
        &DESCRIBE_JOB_QUEUES,
        &DESCRIBE_JOBS,
        &DESCRIBE_SCHEDULING_POLICIES,
        &LIST_JOBS,
        &LIST_SCHEDULING_POLICIES,
        &LIST_TAGS_FOR_RESOURCE,
        &REGISTER_JOB_DEFINITION,
        &SUBMIT_JOB,
        &TAG_RESOURCE,
        &TERMINATE_JOB,
        &UNTAG_RESOURCE,
        &UPDATE_COMPUTE_ENVIRONMENT,
        &UPDATE_JOB_QUEUE,
        &UPDATE_SCHEDULING_POLICY,
    ],
};

const PAGES: Paginator = Paginator::next_token();

pub const CANCEL_JOB: Operation = Operation {
    name: "CancelJob",
    method: Post,
    uri: "/v1/canceljob",
    members: &[
        Member::body("jobId").required(),
        Member::body("reason").required(),
    ],
    paginator: None,
};

pub const CREATE_COMPUTE_ENVIRONMENT: Operation = Operation {
    name: "CreateComputeEnvironment",
    method: Post,
    uri: "/v1/createcomputeenvironment",
    members: &[
        Member::body("computeEnvironmentName").required(),
        Member::body("type").required(),
        Member::body("state"),
        Member::body("unmanagedvCpus"),
        Member::body("computeResources"),
        Member::body("serviceRole"),
        Member::body("tags"),
        Member::body("eksConfiguration"),
    ],
    paginator: None,
};

pub const CREATE_JOB_QUEUE: Operation = Operation {
    name: "CreateJobQueue",
    method: Post,
    uri: "/v1/createjobqueue",
    members: &[
        Member::body("jobQueueName").required(),
        Member::body("state"),
        Member::body("schedulingPolicyArn"),
        Member::body("priority").required(),
        Member::body("computeEnvironmentOrder").required(),
        Member::body("tags"),
    ],
    paginator: None,
};

pub const CREATE_SCHEDULING_POLICY: Operation = Operation {
    name: "CreateSchedulingPolicy",
    method: Post,
    uri: "/v1/createschedulingpolicy",
    members: &[
        Member::body("name").required(),
        Member::body("fairsharePolicy"),
        Member::body("tags"),
    ],
    paginator: None,
};

pub const DELETE_COMPUTE_ENVIRONMENT: Operation = Operation {
    name: "DeleteComputeEnvironment",
    method: Post,
    uri: "/v1/deletecomputeenvironment",
    members: &[Member::body("computeEnvironment").required()],
    paginator: None,
};

pub const DELETE_JOB_QUEUE: Operation = Operation {
    name: "DeleteJobQueue",
    method: Post,
    uri: "/v1/deletejobqueue",
    members: &[Member::body("jobQueue").required()],
    paginator: None,
};

pub const DELETE_SCHEDULING_POLICY: Operation = Operation {
    name: "DeleteSchedulingPolicy",
    method: Post,
    uri: "/v1/deleteschedulingpolicy",
    members: &[Member::body("arn").required()],
    paginator: None,
};

pub const DEREGISTER_JOB_DEFINITION: Operation = Operation {
    name: "DeregisterJobDefinition",
    method: Post,
    uri: "/v1/deregisterjobdefinition",
    members: &[Member::body("jobDefinition").required()],
    paginator: None,
};

pub const DESCRIBE_COMPUTE_ENVIRONMENTS: Operation = Operation {
    name: "DescribeComputeEnvironments",
    method: Post,
    uri: "/v1/describecomputeenvironments",
    members: &[
        Member::body("computeEnvironments"),
        Member::body("maxResults"),
        Member::body("nextToken"),
    ],
    paginator: Some(PAGES),
};

pub const DESCRIBE_JOB_DEFINITIONS: Operation = Operation {
    name: "DescribeJobDefinitions",
    method: Post,
    uri: "/v1/describejobdefinitions",
    members: &[
        Member::body("jobDefinitions"),
        Member::body("maxResults"),
        Member::body("jobDefinitionName"),
        Member::body("status"),
        Member::body("nextToken"),
    ],
    paginator: Some(PAGES),
};

pub const DESCRIBE_JOB_QUEUES: Operation = Operation {
    name: "DescribeJobQueues",
    method: Post,
    uri: "/v1/describejobqueues",
    members: &[
        Member::body("jobQueues"),
        Member::body("maxResults"),
        Member::body("nextToken"),
    ],
    paginator: Some(PAGES),
};

pub const DESCRIBE_JOBS: Operation = Operation {
    name: "DescribeJobs",
    method: Post,
    uri: "/v1/describejobs",
    members: &[Member::body("jobs").required()],
    paginator: None,
};

pub const DESCRIBE_SCHEDULING_POLICIES: Operation = Operation {
    name: "DescribeSchedulingPolicies",
    method: Post,
    uri: "/v1/describeschedulingpolicies",
    members: &[Member::body("arns").required()],
    paginator: None,
};

pub const LIST_JOBS: Operation = Operation {
    name: "ListJobs",
    method: Post,
    uri: "/v1/listjobs",
    members: &[
        Member::body("jobQueue"),
        Member::body("arrayJobId"),
        Member::body("multiNodeJobId"),
        Member::body("jobStatus"),
        Member::body("maxResults"),
        Member::body("nextToken"),
        Member::body("filters"),
    ],
    paginator: Some(PAGES),
};

pub const LIST_SCHEDULING_POLICIES: Operation = Operation {
    name: "ListSchedulingPolicies",
    method: Post,
    uri: "/v1/listschedulingpolicies",
    members: &[Member::body("maxResults"), Member::body("nextToken")],
    paginator: Some(PAGES),
};

pub const LIST_TAGS_FOR_RESOURCE: Operation = Operation {
    name: "ListTagsForResource",
    method: Get,
    uri: "/v1/tags/{resourceArn}",
    members: &[Member::label("resourceArn")],
    paginator: None,
};

pub const REGISTER_JOB_DEFINITION: Operation = Operation {
    name: "RegisterJobDefinition",
    method: Post,
    uri: "/v1/registerjobdefinition",
    members: &[
        Member::body("jobDefinitionName").required(),
        Member::body("type").required(),
        Member::body("parameters"),
        Member::body("schedulingPriority"),
        Member::body("containerProperties"),
        Member::body("nodeProperties"),
        Member::body("retryStrategy"),
        Member::body("propagateTags"),
        Member::body("timeout"),
        Member::body("tags"),
        Member::body("platformCapabilities"),
        Member::body("eksProperties"),
    ],
    paginator: None,
};

pub const SUBMIT_JOB: Operation = Operation {
    name: "SubmitJob",
    method: Post,
    uri: "/v1/submitjob",
    members: &[
        Member::body("jobName").required(),
        Member::body("jobQueue").required(),
        Member::body("shareIdentifier"),
        Member::body("schedulingPriorityOverride"),
        Member::body("arrayProperties"),
        Member::body("dependsOn"),
        Member::body("jobDefinition").required(),
        Member::body("parameters"),
        Member::body("containerOverrides"),
        Member::body("nodeOverrides"),
        Member::body("retryStrategy"),
        Member::body("propagateTags"),
        Member::body("timeout"),
        Member::body("tags"),
    ],
    paginator: None,
};

pub const TAG_RESOURCE: Operation = Operation {
    name: "TagResource",
    method: Post,
    uri: "/v1/tags/{resourceArn}",
    members: &[
        Member::label("resourceArn"),
        Member::body("tags").required(),
    ],
    paginator: None,
};

pub const TERMINATE_JOB: Operation = Operation {
    name: "TerminateJob",
    method: Post,
    uri: "/v1/terminatejob",
    members: &[
        Member::body("jobId").required(),
        Member::body("reason").required(),
    ],
    paginator: None,
};

pub const UNTAG_RESOURCE: Operation = Operation {
    name: "UntagResource",
    method: Delete,
    uri: "/v1/tags/{resourceArn}",
    members: &[
        Member::label("resourceArn"),
        Member::query("tagKeys", "tagKeys").required(),
    ],
    paginator: None,
};

pub const UPDATE_COMPUTE_ENVIRONMENT: Operation = Operation {
    name: "UpdateComputeEnvironment",
    method: Post,
    uri: "/v1/updatecomputeenvironment",
    members: &[
        Member::body("computeEnvironment").required(),
        Member::body("state"),
        Member::body("unmanagedvCpus"),
        Member::body("computeResources"),
        Member::body("serviceRole"),
        Member::body("updatePolicy"),
    ],
    paginator: None,
};

pub const UPDATE_JOB_QUEUE: Operation = Operation {
    name: "UpdateJobQueue",
    method: Post,
    uri: "/v1/updatejobqueue",
    members: &[
        Member::body("jobQueue").required(),
        Member::body("state"),
        Member::body("schedulingPolicyArn"),
        Member::body("priority"),
        Member::body("computeEnvironmentOrder"),
    ],
    paginator: None,
};

pub const UPDATE_SCHEDULING_POLICY: Operation = Operation {
    name: "UpdateSchedulingPolicy",
    method: Post,
    uri: "/v1/updateschedulingpolicy",
    members: &[
        Member::body("arn").required(),
        Member::body("fairsharePolicy"),
    ],
    paginator: None,
};
